use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom};
use std::{env, fmt, process};

use ini::Ini;

fn main() {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| String::from("cfg"));

    let mut path = String::from("default.cfg");
    let mut positional = Vec::with_capacity(4);

    while let Some(arg) = args.next() {
        if arg == "-f" {
            match args.next() {
                Some(value) => path = value,
                None => usage(&program),
            }
        } else {
            positional.push(arg);
        }
    }

    if positional.len() < 3 {
        usage(&program);
    }

    match positional[0].as_str() {
        "get" => {
            let mut file = or_exit(File::open(&path));
            let conf = or_exit(Ini::from_reader(&mut file));
            let value = or_exit(conf.get(&positional[1], &positional[2]));

            println!("{value}");
        }
        "set" => {
            if positional.len() < 4 {
                usage(&program);
            }

            let mut file = or_exit(
                OpenOptions::new()
                    .read(true)
                    .write(true)
                    .create(true)
                    .open(&path),
            );
            let mut conf = or_exit(Ini::from_reader(&mut file));
            conf.set(&positional[1], &positional[2], &positional[3]);

            // Rewrite the whole file from the beginning.
            or_exit(file.seek(SeekFrom::Start(0)));
            or_exit(file.set_len(0));
            or_exit(conf.write_to(&mut file));
        }
        _ => usage(&program),
    }
}

fn usage(program: &str) -> ! {
    println!("{program} -f <filename> get <section> <key>");
    println!("{program} -f <filename> set <section> <key> <value>");
    process::exit(0);
}

/// Unwrap `result`, or print the error as a single line and exit non-zero.
fn or_exit<T, E>(result: Result<T, E>) -> T
where
    E: fmt::Display,
{
    match result {
        Ok(value) => value,
        Err(err) => {
            println!("{err}");
            process::exit(1);
        }
    }
}
