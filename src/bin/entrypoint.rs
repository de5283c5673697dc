use std::env;
use std::process::ExitCode;

use anyhow::Error;
use rootfs_tar::entrypoint::Invocation;

fn main() -> ExitCode {
    env_logger::init();

    let Some(invocation) = Invocation::parse(env::args_os().skip(1)) else {
        eprintln!("entrypoint: no input files");
        return ExitCode::FAILURE;
    };

    report(&invocation.run());
    ExitCode::FAILURE
}

fn report(err: &Error) {
    eprintln!("entrypoint: {}", err.root_cause());
    eprintln!("{err}");
}
