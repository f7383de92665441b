//! The dispatch layer: one raw input line in, one rendered outcome out.
//!
//! A line is split on whitespace into a command token and at most two
//! argument tokens (no quoting); extra tokens are ignored. The layer knows
//! nothing about the tree beyond the [`Session`] method set.

use crate::Session;

/// Result of evaluating one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user; empty for silent successes and blank lines.
    Output(String),
    /// The session asked to terminate; the caller should tear the tree
    /// down via [`Session::destroy`].
    Exit,
}

/// Evaluates one line against `session` and renders the result.
///
/// Recognised commands: `touch`, `ls` (optional `-l`), `rm`, `mv`, `mkdir`,
/// `cd`, `pwd` (alias `pwt`), `chmod`, `exit`. Anything else answers
/// `command not found`; failures render through their `Display` text and
/// never abort the session.
pub fn eval_line(session: &mut Session, line: &str) -> Outcome {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Outcome::Output(String::new());
    };
    let arg1 = tokens.next();
    let arg2 = tokens.next();

    let result = match command {
        "exit" => return Outcome::Exit,
        "pwd" | "pwt" => session.pwd(),
        "ls" => Ok(session.ls(arg1 == Some("-l")).join("\n")),
        "touch" => session.touch(arg1),
        "rm" => session.rm(arg1),
        "mv" => session.mv(arg1, arg2),
        "mkdir" => session.mkdir(arg1),
        "cd" => session.cd(arg1).map(|()| String::new()),
        "chmod" => session.chmod(arg1, arg2),
        _ => return Outcome::Output("command not found".to_string()),
    };

    match result {
        Ok(text) => Outcome::Output(text),
        Err(err) => Outcome::Output(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out(text: &str) -> Outcome {
        Outcome::Output(text.to_string())
    }

    fn session() -> Session {
        Session::new().unwrap()
    }

    #[test]
    fn test_blank_line_is_silent() {
        let mut s = session();
        assert_eq!(eval_line(&mut s, ""), out(""));
        assert_eq!(eval_line(&mut s, "   "), out(""));
    }

    #[test]
    fn test_unknown_command() {
        let mut s = session();
        assert_eq!(eval_line(&mut s, "cat readme"), out("command not found"));
    }

    #[test]
    fn test_exit() {
        let mut s = session();
        assert_eq!(eval_line(&mut s, "exit"), Outcome::Exit);
    }

    #[test]
    fn test_pwt_alias() {
        let mut s = session();
        assert_eq!(eval_line(&mut s, "pwd"), out("/"));
        assert_eq!(eval_line(&mut s, "pwt"), out("/"));
    }

    #[test]
    fn test_usage_rendering() {
        let mut s = session();
        assert_eq!(eval_line(&mut s, "touch"), out("usage: touch <name>"));
        assert_eq!(eval_line(&mut s, "mv only-one"), out("usage: mv <old> <new>"));
        assert_eq!(eval_line(&mut s, "cd"), out("usage: cd <dir>"));
    }

    #[test]
    fn test_ls_long_flag() {
        let mut s = session();
        eval_line(&mut s, "touch f");
        assert_eq!(eval_line(&mut s, "ls"), out("f"));
        assert_eq!(eval_line(&mut s, "ls -l"), out("-rw-    0 f"));
    }

    #[test]
    fn test_extra_tokens_are_ignored() {
        let mut s = session();
        assert_eq!(
            eval_line(&mut s, "touch a b c"),
            out("file 'a' created")
        );
    }

    #[test]
    fn test_error_rendering() {
        let mut s = session();
        eval_line(&mut s, "mkdir docs");
        assert_eq!(
            eval_line(&mut s, "touch docs"),
            out("name already exists: docs")
        );
        assert_eq!(
            eval_line(&mut s, "rm ghost"),
            out("no such file or directory: ghost")
        );
    }

    #[test]
    fn test_walkthrough() {
        let mut s = session();
        assert_eq!(eval_line(&mut s, "mkdir a"), out("directory 'a' created"));
        assert_eq!(eval_line(&mut s, "cd a"), out(""));
        assert_eq!(eval_line(&mut s, "mkdir b"), out("directory 'b' created"));
        assert_eq!(eval_line(&mut s, "cd b"), out(""));
        assert_eq!(eval_line(&mut s, "pwd"), out("/a/b"));
        assert_eq!(eval_line(&mut s, "cd /"), out(""));
        assert_eq!(eval_line(&mut s, "ls"), out("a/"));
    }
}
