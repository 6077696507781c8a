use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

/// Reads a json document from the file named on the command line (or stdin
/// when absent), parses it strictly, and prints the compact form. Parse
/// errors go to stderr with their position and exit nonzero.
fn main() {
    let input = match env::args().nth(1) {
        Some(path) => match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("{path}: {e}");
                process::exit(2);
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("stdin: {e}");
                process::exit(2);
            }
            buf
        }
    };

    match ordered_json::parse(&input) {
        Ok(value) => match ordered_json::write(&value) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
