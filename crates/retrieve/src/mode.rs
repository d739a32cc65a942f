//! crates/retrieve/src/mode.rs
//!
//! `ls -l` style rendering of Unix mode bits.

const FILE_TYPE_MASK: u32 = 0o170_000;
const SETUID: u32 = 0o4000;
const SETGID: u32 = 0o2000;
const STICKY: u32 = 0o1000;

/// Renders `mode` as ten characters: the file type followed by the owner,
/// group and other permission triads.
///
/// Special bits replace the matching execute position: `s`/`S` for setuid and
/// setgid, `t`/`T` for sticky, lowercase when execute is also set. Unknown
/// file types render as `?`.
///
/// # Examples
///
/// ```
/// assert_eq!(retrieve::filemode(0o040_755), "drwxr-xr-x");
/// assert_eq!(retrieve::filemode(0o104_644), "-rwSr--r--");
/// ```
#[must_use]
pub fn filemode(mode: u32) -> String {
    let mut rendered = String::with_capacity(10);
    rendered.push(file_type_char(mode));
    push_triad(&mut rendered, mode >> 6, mode & SETUID != 0, 's');
    push_triad(&mut rendered, mode >> 3, mode & SETGID != 0, 's');
    push_triad(&mut rendered, mode, mode & STICKY != 0, 't');
    rendered
}

const fn file_type_char(mode: u32) -> char {
    match mode & FILE_TYPE_MASK {
        0o140_000 => 's',
        0o120_000 => 'l',
        0o100_000 => '-',
        0o060_000 => 'b',
        0o040_000 => 'd',
        0o020_000 => 'c',
        0o010_000 => 'p',
        _ => '?',
    }
}

fn push_triad(rendered: &mut String, bits: u32, special: bool, special_char: char) {
    rendered.push(if bits & 0o4 != 0 { 'r' } else { '-' });
    rendered.push(if bits & 0o2 != 0 { 'w' } else { '-' });
    let execute = bits & 0o1 != 0;
    rendered.push(match (special, execute) {
        (true, true) => special_char,
        (true, false) => special_char.to_ascii_uppercase(),
        (false, true) => 'x',
        (false, false) => '-',
    });
}
