//! Maps status tones onto thaw badge colours and CSS modifiers.

use contracts::domain::common::StatusTone;
use leptos::prelude::*;
use thaw::*;

pub fn badge_color(tone: StatusTone) -> BadgeColor {
    match tone {
        StatusTone::Success => BadgeColor::Success,
        StatusTone::Warning => BadgeColor::Warning,
        StatusTone::Danger => BadgeColor::Danger,
        StatusTone::Brand => BadgeColor::Brand,
        StatusTone::Info | StatusTone::Accent => BadgeColor::Informative,
        StatusTone::Neutral => BadgeColor::Subtle,
    }
}

/// `tone--success` and friends, styled in `style.css`
pub fn tone_class(tone: StatusTone) -> String {
    format!("tone--{}", tone.as_str())
}

#[component]
pub fn ToneBadge(tone: StatusTone, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(tone)>
            {label}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_class() {
        assert_eq!(tone_class(StatusTone::Danger), "tone--danger");
    }
}
