//! CardAnimated: thaw `Card` with the `card-appear` entrance animation.
//!
//! Consecutive cards pass increasing `delay_ms` for a staggered reveal:
//! ```text
//! <CardAnimated delay_ms=0>...</CardAnimated>
//! <CardAnimated delay_ms=80>...</CardAnimated>
//! ```
//! The keyframes live in `style.css`.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation
    #[prop(optional, into)]
    style: String,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}

/// Delay of the `index`-th card in a staggered grid
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 80), 0);
        assert_eq!(stagger_delay(3, 80), 240);
    }
}
