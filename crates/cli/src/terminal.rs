//! Host terminal handling for the console loop.
//!
//! `RawTerminal` switches stdin to raw mode so every keystroke reaches the guest UART
//! unbuffered and unechoed, and restores the saved settings when dropped. `poll_byte`
//! reads one pending byte without blocking.

use std::io;
use std::mem::MaybeUninit;

/// Saved terminal settings; dropping the guard restores them.
#[derive(Debug)]
pub struct RawTerminal {
    saved: libc::termios,
}

impl RawTerminal {
    /// Puts stdin into raw mode.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when stdin is not a terminal (piped input is forwarded as-is), the
    /// guard on success, or the OS error from `tcgetattr`/`tcsetattr`.
    pub fn enable() -> io::Result<Option<Self>> {
        // SAFETY: isatty only inspects the descriptor.
        if unsafe { libc::isatty(libc::STDIN_FILENO) } != 1 {
            return Ok(None);
        }

        let mut termios = MaybeUninit::<libc::termios>::uninit();
        // SAFETY: tcgetattr fully initializes `termios` when it returns 0.
        let saved = unsafe {
            if libc::tcgetattr(libc::STDIN_FILENO, termios.as_mut_ptr()) != 0 {
                return Err(io::Error::last_os_error());
            }
            termios.assume_init()
        };

        let mut raw = saved;
        raw.c_iflag &= !(libc::IGNBRK
            | libc::BRKINT
            | libc::PARMRK
            | libc::ISTRIP
            | libc::INLCR
            | libc::IGNCR
            | libc::ICRNL
            | libc::IXON);
        raw.c_oflag &= !libc::OPOST;
        raw.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
        raw.c_cflag &= !(libc::CSIZE | libc::PARENB);
        raw.c_cflag |= libc::CS8;

        // SAFETY: `raw` is a valid termios derived from the current settings.
        if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &raw) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(Some(Self { saved }))
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        // SAFETY: `saved` came from tcgetattr on the same descriptor.
        let _ = unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &self.saved) };
    }
}

/// Reads one byte from stdin if one is available right now.
///
/// # Returns
///
/// `None` when no input is pending, on end of file, or on a read error.
pub fn poll_byte() -> Option<u8> {
    let mut fds = libc::pollfd {
        fd: libc::STDIN_FILENO,
        events: libc::POLLIN,
        revents: 0,
    };
    // SAFETY: `fds` is a single valid pollfd; a zero timeout never blocks.
    let ready = unsafe { libc::poll(&mut fds, 1, 0) };
    if ready <= 0 || (fds.revents & libc::POLLIN) == 0 {
        return None;
    }

    let mut byte = 0u8;
    // SAFETY: reads at most one byte into a valid one-byte buffer.
    let n = unsafe { libc::read(libc::STDIN_FILENO, (&raw mut byte).cast(), 1) };
    (n == 1).then_some(byte)
}
