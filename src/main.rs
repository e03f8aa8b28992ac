use hsh::error::ShellError;
use hsh::flags::Flags;
use hsh::shell::Shell;
use std::{env, process};

fn init_logging(flags: &Flags) {
    let level = if flags.is_set("quiet") {
        "off"
    } else if flags.is_set("debug") {
        "debug"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().filter_or("HSH_LOG", level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let argv0 = args.first().map(String::as_str).unwrap_or("hsh");

    let mut flags = Flags::new();
    if let Err(e) = flags.parse(args.get(1..).unwrap_or_default()) {
        eprintln!("{}: {}", argv0, e);
        eprintln!("Try '{} --help' for more information.", argv0);
        process::exit(2);
    }

    if flags.is_set("help") {
        flags.print_help();
        return;
    }

    if flags.is_set("version") {
        println!("hsh {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    init_logging(&flags);

    let status = match Shell::launch(&flags, argv0) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("{}: 0: {}", argv0, e);
            match e {
                ShellError::ScriptNotFound(_) => 127,
                _ => 2,
            }
        }
    };
    process::exit(status);
}
