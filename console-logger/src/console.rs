use nu_ansi_term::Color::{Cyan, Red, Yellow};

/// Print info on console.
pub fn info(message: &str) {
    println!("{}", Cyan.bold().italic().paint(message));
}

/// Print a notice that something expected was not found.
pub fn notice(message: &str) {
    println!("{}", Yellow.bold().paint(message));
}

/// Print an error on stderr, followed by its detail.
pub fn error(message: &str, detail: &str) {
    eprintln!(
        "{} \n {} ",
        Red.bold().paint(message),
        Red.italic().paint(detail)
    );
}
