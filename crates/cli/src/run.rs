use crate::args::Cli;
use crate::runtime::Runtime;
use envault_core::CancelSignal;
use std::io::Write;
use std::process::ExitStatus;
use tracing::{debug, warn};

/// Inject, then run the command. Returns the process exit code.
///
/// - `1` when injection fails (the command is not started) or the command
///   cannot be spawned
/// - `128 + signal` when the command is killed by a signal
/// - the command's own exit code otherwise
///
/// Ctrl-C while providers are running cancels in-flight vault requests.
pub async fn run<R: Runtime + ?Sized>(cli: &Cli, runtime: &R, stderr: &mut dyn Write) -> i32 {
    let Some((program, args)) = cli.command.split_first() else {
        let _ = writeln!(stderr, "envault: missing command");
        return 2;
    };

    let signal = CancelSignal::new();
    let providers = runtime.gather(cli);
    debug!("gathered {} provider(s)", providers.len());

    let interrupt = {
        let signal = signal.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, cancelling injection");
                signal.cancel();
            }
        })
    };
    let injected = runtime.inject(&signal, &providers).await;
    interrupt.abort();

    if let Err(err) = injected {
        let _ = writeln!(stderr, "envault: {err}");
        return 1;
    }

    match runtime.execute(program, args).await {
        Ok(status) => {
            debug!("{} exited with {}", program, status);
            exit_code(status)
        }
        Err(e) => {
            let _ = writeln!(stderr, "envault: failed to execute \"{program}\": {e}");
            1
        }
    }
}

/// Map a child's exit status to our own exit code
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
