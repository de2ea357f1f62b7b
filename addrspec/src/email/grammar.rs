//! RFC 5322 addr-spec grammar.
//!
//! One static [`Rule`] per production of RFC 5322 §3.2.1 through §3.4.1,
//! plus the obsolete syntax of §4.1 through §4.4 that a receiver must still
//! accept. Each rule carries its ABNF above it. The [`strict`] module holds
//! the same productions with every `obs-` alternative removed.
//!
//! Alternation is ordered (first match wins), so the anchored entry points
//! ([`LOCAL_PART_COMPLETE`], [`DOMAIN_COMPLETE`] and their strict
//! counterparts) anchor each alternative separately. A prefix match by
//! `dot-atom` must not hide a full match by `obs-local-part`.
//!
//! Comments nest through [`Rule::lazy`], so nesting deeper than
//! [`MAX_NESTING_DEPTH`](crate::parser::MAX_NESTING_DEPTH) does not match.
//!
//! # References
//! - <https://datatracker.ietf.org/doc/html/rfc5322#section-3.2>
//! - <https://datatracker.ietf.org/doc/html/rfc5234#appendix-B.1>
use once_cell::sync::Lazy;

use crate::parser::Rule;
use crate::{alt, seq};

// RFC 5234 core rules

// ALPHA = %x41-5A / %x61-7A
static ALPHA: Lazy<Rule> = Lazy::new(|| Rule::range('A', 'Z').or(Rule::range('a', 'z')));

// DIGIT = %x30-39
static DIGIT: Lazy<Rule> = Lazy::new(|| Rule::range('0', '9'));

// WSP = SP / HTAB
static WSP: Lazy<Rule> = Lazy::new(|| Rule::any_of(" \t"));

// CRLF = CR LF
static CRLF: Lazy<Rule> = Lazy::new(|| Rule::char('\r').then(Rule::char('\n')));

// VCHAR = %x21-7E
static VCHAR: Lazy<Rule> = Lazy::new(|| Rule::range('!', '~'));

// Shapes shared by the full and the strict productions

// "(" *([FWS] ccontent) [FWS] ")"
fn comment(fws: &Rule, ccontent: &Rule) -> Rule {
    seq!(
        Rule::char('('),
        fws.clone().optional().then(ccontent.clone()).zero_or_more(),
        fws.clone().optional(),
        Rule::char(')'),
    )
}

// (1*([FWS] comment) [FWS]) / FWS
fn cfws(fws: &Rule, comment: &Rule) -> Rule {
    fws.clone()
        .optional()
        .then(comment.clone())
        .at_least(1)
        .then(fws.clone().optional())
        .or(fws.clone())
}

// [CFWS] inner [CFWS]
fn padded(cfws: &Rule, inner: Rule) -> Rule {
    seq!(cfws.clone().optional(), inner, cfws.clone().optional())
}

// [CFWS] open *([FWS] content) [FWS] close [CFWS]
fn delimited(cfws: &Rule, fws: &Rule, open: char, content: &Rule, close: char) -> Rule {
    padded(
        cfws,
        seq!(
            Rule::char(open),
            fws.clone().optional().then(content.clone()).zero_or_more(),
            fws.clone().optional(),
            Rule::char(close),
        ),
    )
}

// 3.2.1. Quoted characters

/// `quoted-pair = ("\" (VCHAR / WSP)) / obs-qp`
pub static QUOTED_PAIR: Lazy<Rule> =
    Lazy::new(|| strict::QUOTED_PAIR.clone().or(OBS_QP.clone()));

// 3.2.2. Folding White Space and Comments

/// `FWS = ([*WSP CRLF] 1*WSP) / obs-FWS`
///
/// `obs-FWS` is tried first. Every input starting with WSP that the first
/// alternative matches is a prefix of what `obs-FWS` matches, so the longer
/// fold (" \r\n \r\n ") is not cut short.
pub static FWS: Lazy<Rule> = Lazy::new(|| OBS_FWS.clone().or(strict::FWS.clone()));

/// `ctext = %d33-39 / %d42-91 / %d93-126 / obs-ctext`
///
/// Printable US-ASCII characters not including "(", ")", or "\".
pub static CTEXT: Lazy<Rule> = Lazy::new(|| strict::CTEXT.clone().or(OBS_CTEXT.clone()));

/// `ccontent = ctext / quoted-pair / comment`
pub static CCONTENT: Lazy<Rule> =
    Lazy::new(|| alt!(CTEXT.clone(), QUOTED_PAIR.clone(), Rule::lazy(|| &*COMMENT)));

/// `comment = "(" *([FWS] ccontent) [FWS] ")"`
pub static COMMENT: Lazy<Rule> = Lazy::new(|| comment(&FWS, &CCONTENT));

/// `CFWS = (1*([FWS] comment) [FWS]) / FWS`
pub static CFWS: Lazy<Rule> = Lazy::new(|| cfws(&FWS, &COMMENT));

// 3.2.3. Atom

/// `atext = ALPHA / DIGIT / "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" /
/// "-" / "/" / "=" / "?" / "^" / "_" / "`" / "{" / "|" / "}" / "~"`
pub static ATEXT: Lazy<Rule> = Lazy::new(|| {
    alt!(
        ALPHA.clone(),
        DIGIT.clone(),
        Rule::any_of("!#$%&'*+-/=?^_`{|}~"),
    )
});

/// `atom = [CFWS] 1*atext [CFWS]`
pub static ATOM: Lazy<Rule> = Lazy::new(|| padded(&CFWS, ATEXT.clone().at_least(1)));

/// `dot-atom-text = 1*atext *("." 1*atext)`
pub static DOT_ATOM_TEXT: Lazy<Rule> = Lazy::new(|| {
    ATEXT
        .clone()
        .at_least(1)
        .then(Rule::char('.').then(ATEXT.clone().at_least(1)).zero_or_more())
});

/// `dot-atom = [CFWS] dot-atom-text [CFWS]`
pub static DOT_ATOM: Lazy<Rule> = Lazy::new(|| padded(&CFWS, DOT_ATOM_TEXT.clone()));

// 3.2.4. Quoted Strings

/// `qtext = %d33 / %d35-91 / %d93-126 / obs-qtext`
///
/// Printable US-ASCII characters not including "\" or the quote character.
pub static QTEXT: Lazy<Rule> = Lazy::new(|| strict::QTEXT.clone().or(OBS_QTEXT.clone()));

/// `qcontent = qtext / quoted-pair`
pub static QCONTENT: Lazy<Rule> = Lazy::new(|| QTEXT.clone().or(QUOTED_PAIR.clone()));

/// `quoted-string = [CFWS] DQUOTE *([FWS] qcontent) [FWS] DQUOTE [CFWS]`
pub static QUOTED_STRING: Lazy<Rule> =
    Lazy::new(|| delimited(&CFWS, &FWS, '"', &QCONTENT, '"'));

// 3.2.5. Miscellaneous Tokens

/// `word = atom / quoted-string`
pub static WORD: Lazy<Rule> = Lazy::new(|| ATOM.clone().or(QUOTED_STRING.clone()));

// 3.4.1. Addr-Spec Specification

/// `addr-spec = local-part "@" domain`
///
/// Sequencing does not backtrack into `local-part`, so an address whose
/// local-part only validates as `obs-local-part` after a shorter `dot-atom`
/// match will not parse here. [`crate::email::Validator::parse`] splits on
/// "@" instead.
pub static ADDR_SPEC: Lazy<Rule> =
    Lazy::new(|| seq!(LOCAL_PART.clone(), Rule::char('@'), DOMAIN.clone()));

/// `local-part = dot-atom / quoted-string / obs-local-part`
pub static LOCAL_PART: Lazy<Rule> = Lazy::new(|| {
    alt!(
        DOT_ATOM.clone(),
        QUOTED_STRING.clone(),
        OBS_LOCAL_PART.clone(),
    )
});

/// `domain = dot-atom / domain-literal / obs-domain`
pub static DOMAIN: Lazy<Rule> = Lazy::new(|| {
    alt!(
        DOT_ATOM.clone(),
        DOMAIN_LITERAL.clone(),
        OBS_DOMAIN.clone(),
    )
});

/// `domain-literal = [CFWS] "[" *([FWS] dtext) [FWS] "]" [CFWS]`
pub static DOMAIN_LITERAL: Lazy<Rule> =
    Lazy::new(|| delimited(&CFWS, &FWS, '[', &DTEXT, ']'));

/// `dtext = %d33-90 / %d94-126 / obs-dtext`
///
/// Printable US-ASCII characters not including "[", "]", or "\".
pub static DTEXT: Lazy<Rule> = Lazy::new(|| strict::DTEXT.clone().or(OBS_DTEXT.clone()));

// 4.1. Miscellaneous Obsolete Tokens

/// `obs-NO-WS-CTL = %d1-8 / %d11 / %d12 / %d14-31 / %d127`
///
/// US-ASCII control characters that do not include the carriage return,
/// line feed, and white space characters.
pub static OBS_NO_WS_CTL: Lazy<Rule> = Lazy::new(|| {
    alt!(
        Rule::range('\u{01}', '\u{08}'),
        Rule::any_of("\u{0b}\u{0c}"),
        Rule::range('\u{0e}', '\u{1f}'),
        Rule::char('\u{7f}'),
    )
});

/// `obs-ctext = obs-NO-WS-CTL`
pub static OBS_CTEXT: Lazy<Rule> = Lazy::new(|| OBS_NO_WS_CTL.clone());

/// `obs-qtext = obs-NO-WS-CTL`
pub static OBS_QTEXT: Lazy<Rule> = Lazy::new(|| OBS_NO_WS_CTL.clone());

/// `obs-qp = "\" (%d0 / obs-NO-WS-CTL / LF / CR)`
pub static OBS_QP: Lazy<Rule> = Lazy::new(|| {
    Rule::char('\\').then(alt!(
        Rule::char('\0'),
        OBS_NO_WS_CTL.clone(),
        Rule::any_of("\n\r"),
    ))
});

// 4.2. Obsolete Folding White Space

/// `obs-FWS = 1*WSP *(CRLF 1*WSP)`
pub static OBS_FWS: Lazy<Rule> = Lazy::new(|| {
    WSP.clone()
        .at_least(1)
        .then(CRLF.clone().then(WSP.clone().at_least(1)).zero_or_more())
});

// 4.4. Obsolete Addressing

/// `obs-local-part = word *("." word)`
pub static OBS_LOCAL_PART: Lazy<Rule> = Lazy::new(|| {
    WORD.clone()
        .then(Rule::char('.').then(WORD.clone()).zero_or_more())
});

/// `obs-domain = atom *("." atom)`
pub static OBS_DOMAIN: Lazy<Rule> = Lazy::new(|| {
    ATOM.clone()
        .then(Rule::char('.').then(ATOM.clone()).zero_or_more())
});

/// `obs-dtext = obs-NO-WS-CTL / quoted-pair`
pub static OBS_DTEXT: Lazy<Rule> = Lazy::new(|| OBS_NO_WS_CTL.clone().or(QUOTED_PAIR.clone()));

// Anchored entry points

/// A whole string that is a `local-part`.
pub static LOCAL_PART_COMPLETE: Lazy<Rule> = Lazy::new(|| {
    alt!(
        DOT_ATOM.clone().complete(),
        QUOTED_STRING.clone().complete(),
        OBS_LOCAL_PART.clone().complete(),
    )
});

/// A whole string that is a `domain`.
pub static DOMAIN_COMPLETE: Lazy<Rule> = Lazy::new(|| {
    alt!(
        DOT_ATOM.clone().complete(),
        DOMAIN_LITERAL.clone().complete(),
        OBS_DOMAIN.clone().complete(),
    )
});

/// The productions of RFC 5322 §3 without any §4 obsolete syntax.
///
/// Control characters, escaped NUL/CR/LF, multi-line folds, `obs-local-part`
/// and `obs-domain` are all rejected here.
pub mod strict {
    use once_cell::sync::Lazy;

    use super::{CRLF, DOT_ATOM_TEXT, VCHAR, WSP, cfws, comment, delimited, padded};
    use crate::parser::Rule;
    use crate::alt;

    /// `quoted-pair = "\" (VCHAR / WSP)`
    pub static QUOTED_PAIR: Lazy<Rule> =
        Lazy::new(|| Rule::char('\\').then(VCHAR.clone().or(WSP.clone())));

    /// `FWS = [*WSP CRLF] 1*WSP`
    pub static FWS: Lazy<Rule> = Lazy::new(|| {
        WSP.clone()
            .zero_or_more()
            .then(CRLF.clone())
            .optional()
            .then(WSP.clone().at_least(1))
    });

    /// `ctext = %d33-39 / %d42-91 / %d93-126`
    pub static CTEXT: Lazy<Rule> = Lazy::new(|| {
        alt!(
            Rule::range('!', '\''),
            Rule::range('*', '['),
            Rule::range(']', '~'),
        )
    });

    /// `ccontent = ctext / quoted-pair / comment`
    pub static CCONTENT: Lazy<Rule> =
        Lazy::new(|| alt!(CTEXT.clone(), QUOTED_PAIR.clone(), Rule::lazy(|| &*COMMENT)));

    /// `comment = "(" *([FWS] ccontent) [FWS] ")"`
    pub static COMMENT: Lazy<Rule> = Lazy::new(|| comment(&FWS, &CCONTENT));

    /// `CFWS = (1*([FWS] comment) [FWS]) / FWS`
    pub static CFWS: Lazy<Rule> = Lazy::new(|| cfws(&FWS, &COMMENT));

    /// `dot-atom = [CFWS] dot-atom-text [CFWS]`
    pub static DOT_ATOM: Lazy<Rule> = Lazy::new(|| padded(&CFWS, DOT_ATOM_TEXT.clone()));

    /// `qtext = %d33 / %d35-91 / %d93-126`
    pub static QTEXT: Lazy<Rule> = Lazy::new(|| {
        alt!(
            Rule::char('!'),
            Rule::range('#', '['),
            Rule::range(']', '~'),
        )
    });

    /// `qcontent = qtext / quoted-pair`
    pub static QCONTENT: Lazy<Rule> = Lazy::new(|| QTEXT.clone().or(QUOTED_PAIR.clone()));

    /// `quoted-string = [CFWS] DQUOTE *([FWS] qcontent) [FWS] DQUOTE [CFWS]`
    pub static QUOTED_STRING: Lazy<Rule> =
        Lazy::new(|| delimited(&CFWS, &FWS, '"', &QCONTENT, '"'));

    /// `dtext = %d33-90 / %d94-126`
    pub static DTEXT: Lazy<Rule> =
        Lazy::new(|| Rule::range('!', 'Z').or(Rule::range('^', '~')));

    /// `domain-literal = [CFWS] "[" *([FWS] dtext) [FWS] "]" [CFWS]`
    pub static DOMAIN_LITERAL: Lazy<Rule> =
        Lazy::new(|| delimited(&CFWS, &FWS, '[', &DTEXT, ']'));

    /// A whole string that is a `local-part`, `dot-atom / quoted-string`.
    pub static LOCAL_PART_COMPLETE: Lazy<Rule> = Lazy::new(|| {
        DOT_ATOM
            .clone()
            .complete()
            .or(QUOTED_STRING.clone().complete())
    });

    /// A whole string that is a `domain`, `dot-atom / domain-literal`.
    pub static DOMAIN_COMPLETE: Lazy<Rule> = Lazy::new(|| {
        DOT_ATOM
            .clone()
            .complete()
            .or(DOMAIN_LITERAL.clone().complete())
    });
}
