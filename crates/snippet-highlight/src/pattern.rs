//! Mode-driven construction of highlight patterns.
//!
//! Every [`SearchMode`] maps to one pure builder that turns the query argument (and, for
//! sentence modes, the backend's pattern) into regex source. Sources are compiled with
//! Oniguruma because several modes rely on lookaround and backreferences.
//!
//! Only [`SearchMode::RawWordRegex`], [`SearchMode::StructuredSentence`] and server patterns
//! are treated as regex. Every other argument is escaped before it is embedded.

use crate::error::ResolveError;
use crate::mode::SearchMode;
use crate::options::ResolveOptions;
use crate::server::{ServerPattern, strip_anchors_from};
use onig::{Regex, RegexOptions, Syntax};

/// Compiles the highlight regex for a `(server pattern, mode, argument)` triple.
pub fn compile_pattern(
    server: Option<&ServerPattern>,
    mode: Option<SearchMode>,
    argument: &str,
    options: &ResolveOptions,
) -> Result<Regex, ResolveError> {
    let source = pattern_source(server, mode, argument, options)?;
    log::trace!("resolved {mode:?} {argument:?} to pattern {source:?}");
    compile(&source, options)
}

/// Builds the regex source for a `(server pattern, mode, argument)` triple without compiling it.
pub fn pattern_source(
    server: Option<&ServerPattern>,
    mode: Option<SearchMode>,
    argument: &str,
    options: &ResolveOptions,
) -> Result<String, ResolveError> {
    let ctx = BuildContext {
        argument: argument.trim(),
        server,
        options,
    };

    match mode {
        Some(mode) => builder_for(mode)(mode, &ctx),
        None => fallback(&ctx),
    }
}

/// Compiles regex source with the flags selected by `options`.
pub fn compile(source: &str, options: &ResolveOptions) -> Result<Regex, ResolveError> {
    let flags = if options.case_sensitive {
        RegexOptions::REGEX_OPTION_NONE
    } else {
        RegexOptions::REGEX_OPTION_IGNORECASE
    };

    Regex::with_options(source, flags, Syntax::default()).map_err(|e| ResolveError::RegexCompile {
        pattern: source.to_string(),
        message: e.to_string(),
    })
}

/// Escapes regex metacharacters so `literal` matches itself.
///
/// Only Oniguruma's metacharacters are escaped. `regex::escape` also escapes `#`, `&`, `-` and
/// `~`, whose escaped forms are not guaranteed literals in every Oniguruma syntax.
pub fn escape(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len() * 2);
    for ch in literal.chars() {
        if matches!(
            ch,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

struct BuildContext<'a> {
    argument: &'a str,
    server: Option<&'a ServerPattern>,
    options: &'a ResolveOptions,
}

type Builder = fn(SearchMode, &BuildContext<'_>) -> Result<String, ResolveError>;

fn builder_for(mode: SearchMode) -> Builder {
    match mode {
        SearchMode::Suffix => suffix,
        SearchMode::SuffixList => suffix_list,
        SearchMode::Prefix => prefix,
        SearchMode::MinLength => min_length,
        SearchMode::MaxLength => max_length,
        SearchMode::ExactLength => exact_length,
        SearchMode::RepeatCount => repeat_count,
        SearchMode::ExactWord | SearchMode::ContainsWord => whole_word,
        SearchMode::RawWordRegex => raw_word_regex,
        SearchMode::ExactPhrase => phrase,
        SearchMode::SentenceStartsWith
        | SearchMode::SentenceEndsWith
        | SearchMode::RawSentenceRegex => server_pattern,
        SearchMode::ContainsAnyOf => any_of_words,
        SearchMode::StructuredSentence => verbatim,
    }
}

fn required<'a>(mode: SearchMode, ctx: &BuildContext<'a>) -> Result<&'a str, ResolveError> {
    if ctx.argument.is_empty() {
        return Err(ResolveError::EmptyArgument(mode.name()));
    }
    Ok(ctx.argument)
}

fn number(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<u32, ResolveError> {
    let argument = required(mode, ctx)?;
    let digits_only = argument.bytes().all(|b| b.is_ascii_digit());
    match argument.parse::<u32>() {
        Ok(n) if digits_only && n >= 1 => Ok(n),
        _ => Err(ResolveError::InvalidNumber {
            mode: mode.name(),
            argument: argument.to_string(),
        }),
    }
}

fn terms<'a>(
    mode: SearchMode,
    ctx: &BuildContext<'a>,
    separators: &[char],
) -> Result<Vec<&'a str>, ResolveError> {
    let argument = required(mode, ctx)?;
    let terms: Vec<&str> = argument
        .split(separators)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if terms.is_empty() {
        return Err(ResolveError::EmptyArgument(mode.name()));
    }
    Ok(terms)
}

fn suffix(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    Ok(format!(r"{}(?!\w)", escape(required(mode, ctx)?)))
}

fn suffix_list(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    let alternatives = terms(mode, ctx, &[',', '|'])?
        .into_iter()
        .map(escape)
        .collect::<Vec<_>>()
        .join("|");
    Ok(format!(r"(?:{alternatives})(?!\w)"))
}

fn prefix(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    Ok(format!(r"(?<!\w){}", escape(required(mode, ctx)?)))
}

fn min_length(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    Ok(format!(r"\b\w{{{},}}\b", number(mode, ctx)?))
}

fn max_length(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    Ok(format!(r"\b\w{{1,{}}}\b", number(mode, ctx)?))
}

fn exact_length(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    Ok(format!(r"\b\w{{{}}}\b", number(mode, ctx)?))
}

fn repeat_count(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    let extra = number(mode, ctx)? - 1;
    Ok(format!(r"\b\w*?(\w)\1{{{extra},}}\w*?\b"))
}

fn whole_word(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    Ok(format!(r"\b{}\b", escape(required(mode, ctx)?)))
}

fn raw_word_regex(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    let raw = strip_anchors_from(required(mode, ctx)?);
    if raw.is_empty() {
        return Err(ResolveError::EmptyArgument(mode.name()));
    }
    Ok(format!(r"\b(?:{})\b", bound_wildcards(raw)))
}

fn phrase(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    Ok(escape(required(mode, ctx)?))
}

fn server_pattern(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    match ctx.server {
        Some(server) => Ok(server.regex_source(ctx.options.strip_server_anchors)),
        None => {
            log::debug!("no server pattern for {mode}, highlighting the argument literally");
            phrase(mode, ctx)
        }
    }
}

fn any_of_words(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    Ok(terms(mode, ctx, &[','])?
        .into_iter()
        .map(|t| format!(r"\b{}\b", escape(t)))
        .collect::<Vec<_>>()
        .join("|"))
}

fn verbatim(mode: SearchMode, ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    required(mode, ctx).map(str::to_string)
}

fn fallback(ctx: &BuildContext<'_>) -> Result<String, ResolveError> {
    if let Some(server) = ctx.server {
        return Ok(server.regex_source(false));
    }
    if ctx.argument.is_empty() {
        return Err(ResolveError::NothingToMatch);
    }
    Ok(escape(ctx.argument))
}

/// Rewrites every unescaped `.*` outside a character class to `\S*`, so a wildcard never
/// runs across whitespace into the next word.
fn bound_wildcards(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    let mut chars = raw.chars().peekable();
    let mut in_class = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                out.push(ch);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(ch);
            }
            ']' if in_class => {
                in_class = false;
                out.push(ch);
            }
            '.' if !in_class && chars.peek() == Some(&'*') => {
                chars.next();
                out.push_str(r"\S*");
            }
            _ => out.push(ch),
        }
    }

    out
}
