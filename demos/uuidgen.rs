//! Simple command that prints one or '-n count' UUID strings

use std::{env, io, io::Write, process::ExitCode};

use uuidgen::Uuid;

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-4 | -5 name | -7] [-n count]",
                    program.as_deref().unwrap_or("uuidgen")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count {
        let id = match &opts.kind {
            Kind::V4 => uuidgen::uuid4(),
            Kind::V5(name) => uuidgen::uuid5(Uuid::NAMESPACE_DNS, name.as_bytes()),
            Kind::V7 => uuidgen::uuid7(),
        };
        writeln!(buf, "{}", id)?;
    }

    Ok(ExitCode::SUCCESS)
}

enum Kind {
    V4,
    V5(String),
    V7,
}

struct Opts {
    kind: Kind,
    count: usize,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Opts, String> {
    let mut kind = Kind::V7;
    let mut count = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-4" => kind = Kind::V4,
            "-7" => kind = Kind::V7,
            "-5" => {
                let Some(name) = args.next() else {
                    return Err("argument to option '5' missing".to_owned());
                };
                kind = Kind::V5(name);
            }
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok(Opts {
        kind,
        count: count.unwrap_or(1),
    })
}
