use is_terminal::IsTerminal;

/// Decide whether stdout output should carry color.
///
/// `Some(_)` is a forced choice from `--color` / `--no-color`; with `None`
/// colors are used when stdout is a terminal and `NO_COLOR` is unset.
pub fn should_use_colors(preference: Option<bool>) -> bool {
    match preference {
        Some(forced) => forced,
        None => !no_color_requested() && std::io::stdout().is_terminal(),
    }
}

pub fn stderr_supports_colors() -> bool {
    !no_color_requested() && std::io::stderr().is_terminal()
}

fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}
