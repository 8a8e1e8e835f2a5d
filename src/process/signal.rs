use libc::{sighandler_t, signal, SIGINT, SIG_ERR};

use super::ProcessError;

extern "C" fn forward_sigint(_: i32) {
    // The foreground child owns the interrupt; the shell must outlive it.
}

/// Installs the shell's SIGINT disposition for foreground execution. The
/// handler is a no-op in the parent, and the child resets caught signals to
/// their defaults on exec, so an interactive interrupt reaches the child
/// while the shell keeps running.
pub fn install_foreground_handler() -> Result<(), ProcessError> {
    unsafe {
        if signal(SIGINT, forward_sigint as sighandler_t) == SIG_ERR {
            return Err(ProcessError::Signal(
                "failed installing SIGINT handler".to_string(),
            ));
        }
    }
    Ok(())
}
