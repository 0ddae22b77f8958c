//! Terminal plumbing: raw mode and key decoding.

use std::io::{self, Read};

use duemila_core::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Slide(Direction),
    Restart,
    Quit,
    Other,
}

/// Blocks for the next key press. EOF reads as quit so a redirected stdin
/// cannot spin the loop.
pub fn read_key(stdin: &mut impl Read) -> io::Result<Key> {
    let mut buffer = [0u8; 3];
    let n = stdin.read(&mut buffer)?;
    if n == 0 {
        return Ok(Key::Quit);
    }
    Ok(decode(&buffer[..n]))
}

fn decode(bytes: &[u8]) -> Key {
    match bytes {
        // arrow keys arrive as escape sequences
        [27, 91, 65] => Key::Slide(Direction::Up),
        [27, 91, 66] => Key::Slide(Direction::Down),
        [27, 91, 67] => Key::Slide(Direction::Right),
        [27, 91, 68] => Key::Slide(Direction::Left),

        [b'w'] | [b'W'] => Key::Slide(Direction::Up),
        [b's'] | [b'S'] => Key::Slide(Direction::Down),
        [b'a'] | [b'A'] => Key::Slide(Direction::Left),
        [b'd'] | [b'D'] => Key::Slide(Direction::Right),

        [b'r'] | [b'R'] => Key::Restart,
        [b'q'] | [b'Q'] | [3] | [27] => Key::Quit,

        _ => Key::Other,
    }
}

/// Guard that puts the terminal into raw (no echo, unbuffered) mode and
/// restores the previous settings on drop.
#[cfg(unix)]
pub struct RawMode {
    original: libc::termios,
}

#[cfg(unix)]
impl RawMode {
    pub fn enable() -> io::Result<Self> {
        use std::os::unix::io::AsRawFd;

        let fd = io::stdin().as_raw_fd();
        unsafe {
            let mut termios = std::mem::zeroed::<libc::termios>();
            if libc::tcgetattr(fd, &mut termios) != 0 {
                return Err(io::Error::last_os_error());
            }
            let original = termios;
            termios.c_lflag &= !(libc::ICANON | libc::ECHO);
            termios.c_cc[libc::VMIN] = 1;
            termios.c_cc[libc::VTIME] = 0;
            if libc::tcsetattr(fd, libc::TCSANOW, &termios) != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(Self { original })
        }
    }
}

#[cfg(unix)]
impl Drop for RawMode {
    fn drop(&mut self) {
        use std::os::unix::io::AsRawFd;

        let fd = io::stdin().as_raw_fd();
        unsafe {
            libc::tcsetattr(fd, libc::TCSANOW, &self.original);
        }
    }
}

#[cfg(not(unix))]
pub struct RawMode;

#[cfg(not(unix))]
impl RawMode {
    pub fn enable() -> io::Result<Self> {
        // without raw mode each key needs Enter, which is still playable
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(decode(&[27, 91, 65]), Key::Slide(Direction::Up));
        assert_eq!(decode(&[27, 91, 68]), Key::Slide(Direction::Left));
        assert_eq!(decode(&[b'd']), Key::Slide(Direction::Right));
        assert_eq!(decode(&[b'S']), Key::Slide(Direction::Down));
    }

    #[test]
    fn control_keys_decode() {
        assert_eq!(decode(&[b'q']), Key::Quit);
        assert_eq!(decode(&[3]), Key::Quit);
        assert_eq!(decode(&[b'r']), Key::Restart);
        assert_eq!(decode(&[b'x']), Key::Other);
    }

    #[test]
    fn eof_reads_as_quit() {
        let mut empty: &[u8] = &[];
        assert_eq!(read_key(&mut empty).unwrap(), Key::Quit);
    }
}
