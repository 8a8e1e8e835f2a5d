use crate::core::env::Environment;

/// Rewrites one token before it becomes a command argument: a leading tilde
/// first, then environment variable references. Expansion cannot fail; unset
/// variables expand to the empty string and anything malformed stays literal.
pub fn expand(token: &str, env: &Environment) -> String {
    expand_vars(&expand_tilde(token, env), env)
}

/// Only a leading `~` qualifies, either alone or followed by `/`. There is
/// no `~user` lookup; such tokens stay literal, as does `~` anywhere else.
fn expand_tilde(token: &str, env: &Environment) -> String {
    let Some(rest) = token.strip_prefix('~') else {
        return token.to_string();
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        return token.to_string();
    }
    match env.home_dir() {
        Some(home) => format!("{}{}", home.display(), rest),
        None => token.to_string(),
    }
}

/// Replaces `$NAME` and `${NAME}` references in a single left-to-right pass.
/// Substituted text is never rescanned.
fn expand_vars(token: &str, env: &Environment) -> String {
    if !token.contains('$') {
        return token.to_string();
    }

    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if closed && is_name(&name) {
                    out.push_str(env.get(&name).unwrap_or(""));
                } else {
                    out.push_str("${");
                    out.push_str(&name);
                    if closed {
                        out.push('}');
                    }
                }
            }
            Some(next) if is_name_start(next) => {
                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if !is_name_char(next) {
                        break;
                    }
                    name.push(next);
                    chars.next();
                }
                out.push_str(env.get(&name).unwrap_or(""));
            }
            _ => out.push('$'),
        }
    }

    out
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit()
}

fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_name_start) && chars.all(is_name_char)
}
