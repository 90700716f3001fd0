//! Small display helpers shared by server rows and cards.

/// Expands a short game-style code into its display name; unknown codes pass through.
pub fn verbose_game_style(code: &str) -> &str {
    match code {
        "CTF" => "Capture The Flag",
        "FFA" => "Free For All",
        "OFFA" => "Open (Teamless) Free For All",
        "Rabbit" => "Rabbit Chase",
        other => other,
    }
}

/// Pluralizes a `"<count> <noun>"` phrase unless the count is exactly `1`.
pub fn auto_plural(value: &str) -> String {
    if value.split(' ').next() == Some("1") {
        value.to_string()
    } else {
        format!("{value}s")
    }
}

/// Renders a flag as `Yes`/`No`.
pub const fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Accessible label of the favorite toggle button for the current state.
pub const fn favorite_toggle_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "Unfavorite"
    } else {
        "Favorite"
    }
}
