//! Fixed per-filetype highlighting rules.
//!
//! A [`SyntaxRule`] is selected once per file name by [`select_syntax`]: each
//! rule lists file-match patterns, where a pattern starting with `.` must equal
//! the file name's extension (text from the last `.`) and any other pattern
//! matches as a substring of the name. Rules are tried in table order and the
//! first hit wins; no hit means no highlighting at all.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SyntaxFlags: u8 {
        const HIGHLIGHT_NUMBERS = 0b0000_0001;
        const HIGHLIGHT_STRINGS = 0b0000_0010;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// Control flow and declarations.
    Primary,
    /// Type names.
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub text: &'static str,
    pub kind: KeywordKind,
}

impl Keyword {
    pub const fn primary(text: &'static str) -> Self {
        Self {
            text,
            kind: KeywordKind::Primary,
        }
    }

    pub const fn secondary(text: &'static str) -> Self {
        Self {
            text,
            kind: KeywordKind::Secondary,
        }
    }
}

#[derive(Debug)]
pub struct SyntaxRule {
    /// Short name shown in the status bar.
    pub filetype: &'static str,
    pub file_match: &'static [&'static str],
    pub keywords: &'static [Keyword],
    pub single_line_comment: Option<&'static str>,
    /// (start, end) tokens of a block comment.
    pub multi_line_comment: Option<(&'static str, &'static str)>,
    pub flags: SyntaxFlags,
}

impl SyntaxRule {
    /// Does `file_name` select this rule?
    pub fn matches(&self, file_name: &str) -> bool {
        let ext = file_name.rfind('.').map(|i| &file_name[i..]);
        self.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                ext == Some(*pattern)
            } else {
                file_name.contains(pattern)
            }
        })
    }
}

const C_KEYWORDS: &[Keyword] = &[
    Keyword::primary("switch"),
    Keyword::primary("if"),
    Keyword::primary("while"),
    Keyword::primary("for"),
    Keyword::primary("break"),
    Keyword::primary("continue"),
    Keyword::primary("return"),
    Keyword::primary("else"),
    Keyword::primary("struct"),
    Keyword::primary("union"),
    Keyword::primary("typedef"),
    Keyword::primary("static"),
    Keyword::primary("enum"),
    Keyword::primary("class"),
    Keyword::primary("case"),
    Keyword::secondary("int"),
    Keyword::secondary("long"),
    Keyword::secondary("double"),
    Keyword::secondary("float"),
    Keyword::secondary("char"),
    Keyword::secondary("unsigned"),
    Keyword::secondary("signed"),
    Keyword::secondary("void"),
];

const RUST_KEYWORDS: &[Keyword] = &[
    Keyword::primary("as"),
    Keyword::primary("break"),
    Keyword::primary("const"),
    Keyword::primary("continue"),
    Keyword::primary("else"),
    Keyword::primary("enum"),
    Keyword::primary("fn"),
    Keyword::primary("for"),
    Keyword::primary("if"),
    Keyword::primary("impl"),
    Keyword::primary("in"),
    Keyword::primary("let"),
    Keyword::primary("loop"),
    Keyword::primary("match"),
    Keyword::primary("mod"),
    Keyword::primary("mut"),
    Keyword::primary("pub"),
    Keyword::primary("return"),
    Keyword::primary("static"),
    Keyword::primary("struct"),
    Keyword::primary("trait"),
    Keyword::primary("type"),
    Keyword::primary("use"),
    Keyword::primary("where"),
    Keyword::primary("while"),
    Keyword::secondary("bool"),
    Keyword::secondary("char"),
    Keyword::secondary("str"),
    Keyword::secondary("u8"),
    Keyword::secondary("u16"),
    Keyword::secondary("u32"),
    Keyword::secondary("u64"),
    Keyword::secondary("usize"),
    Keyword::secondary("i8"),
    Keyword::secondary("i16"),
    Keyword::secondary("i32"),
    Keyword::secondary("i64"),
    Keyword::secondary("isize"),
    Keyword::secondary("f32"),
    Keyword::secondary("f64"),
    Keyword::secondary("Self"),
];

const PYTHON_KEYWORDS: &[Keyword] = &[
    Keyword::primary("and"),
    Keyword::primary("as"),
    Keyword::primary("break"),
    Keyword::primary("class"),
    Keyword::primary("continue"),
    Keyword::primary("def"),
    Keyword::primary("elif"),
    Keyword::primary("else"),
    Keyword::primary("for"),
    Keyword::primary("from"),
    Keyword::primary("if"),
    Keyword::primary("import"),
    Keyword::primary("in"),
    Keyword::primary("is"),
    Keyword::primary("lambda"),
    Keyword::primary("not"),
    Keyword::primary("or"),
    Keyword::primary("pass"),
    Keyword::primary("return"),
    Keyword::primary("while"),
    Keyword::primary("with"),
    Keyword::primary("yield"),
    Keyword::secondary("int"),
    Keyword::secondary("float"),
    Keyword::secondary("str"),
    Keyword::secondary("bytes"),
    Keyword::secondary("list"),
    Keyword::secondary("dict"),
    Keyword::secondary("None"),
    Keyword::secondary("True"),
    Keyword::secondary("False"),
];

/// The highlight database, in match order.
pub static SYNTAX_TABLE: &[SyntaxRule] = &[
    SyntaxRule {
        filetype: "c",
        file_match: &[".c", ".h", ".cpp"],
        keywords: C_KEYWORDS,
        single_line_comment: Some("//"),
        multi_line_comment: Some(("/*", "*/")),
        flags: SyntaxFlags::HIGHLIGHT_NUMBERS.union(SyntaxFlags::HIGHLIGHT_STRINGS),
    },
    SyntaxRule {
        filetype: "rust",
        file_match: &[".rs"],
        keywords: RUST_KEYWORDS,
        single_line_comment: Some("//"),
        multi_line_comment: Some(("/*", "*/")),
        flags: SyntaxFlags::HIGHLIGHT_NUMBERS.union(SyntaxFlags::HIGHLIGHT_STRINGS),
    },
    SyntaxRule {
        filetype: "python",
        file_match: &[".py"],
        keywords: PYTHON_KEYWORDS,
        single_line_comment: Some("#"),
        multi_line_comment: None,
        flags: SyntaxFlags::HIGHLIGHT_NUMBERS.union(SyntaxFlags::HIGHLIGHT_STRINGS),
    },
];

/// Pick the first rule in [`SYNTAX_TABLE`] whose patterns match `file_name`.
pub fn select_syntax(file_name: &str) -> Option<&'static SyntaxRule> {
    SYNTAX_TABLE.iter().find(|rule| rule.matches(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_selects_rule() {
        assert_eq!(select_syntax("main.c").map(|r| r.filetype), Some("c"));
        assert_eq!(select_syntax("lib/foo.h").map(|r| r.filetype), Some("c"));
        assert_eq!(select_syntax("src/lib.rs").map(|r| r.filetype), Some("rust"));
        assert_eq!(select_syntax("a.py").map(|r| r.filetype), Some("python"));
    }

    #[test]
    fn extension_must_match_exactly() {
        // ".c" is not the extension of "notes.cfg" nor of "x.cc".
        assert!(select_syntax("notes.cfg").is_none());
        assert!(select_syntax("x.cc").is_none());
        assert!(select_syntax("README").is_none());
    }

    #[test]
    fn last_dot_is_the_extension() {
        assert_eq!(select_syntax("archive.tar.c").map(|r| r.filetype), Some("c"));
        assert!(select_syntax("main.c.orig").is_none());
    }

    #[test]
    fn substring_patterns_match_anywhere() {
        static RULE: SyntaxRule = SyntaxRule {
            filetype: "make",
            file_match: &["Makefile"],
            keywords: &[],
            single_line_comment: Some("#"),
            multi_line_comment: None,
            flags: SyntaxFlags::empty(),
        };
        assert!(RULE.matches("src/Makefile"));
        assert!(RULE.matches("Makefile.am"));
        assert!(!RULE.matches("makefile"));
    }
}
