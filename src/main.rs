use rill::error::ShellError;
use rill::flags::Flags;
use rill::shell::{self, Shell};

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("rill: {}", e);
        process::exit(2);
    }

    if flags.is_set("help") {
        flags.print_help();
        return;
    }

    if flags.is_set("version") {
        println!("rill {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let code = match run(flags) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("rill: {}", e);
            1
        }
    };
    process::exit(code);
}

fn run(flags: Flags) -> Result<i32, ShellError> {
    if let Some(script) = flags.script() {
        let file = File::open(script)?;
        return shell::run_batch(BufReader::new(file), &flags);
    }

    if !stdin_isatty() {
        let stdin = io::stdin();
        return shell::run_batch(stdin.lock(), &flags);
    }

    Shell::new(flags)?.run()
}

fn stdin_isatty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}
