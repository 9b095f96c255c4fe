//! Seasonal Snow Effect
//!
//! Falling snow particles with random positions, shown per the stored
//! preference and the current month.

use chrono::Datelike;
use leptos::prelude::*;

use crate::storage::SeasonalEffect;

const FLAKES: usize = 40;

#[derive(Debug, Clone, PartialEq)]
struct Flake {
    left: f64,
    size: f64,
    duration: f64,
    delay: f64,
}

impl Flake {
    /// Map four uniform samples in [0, 1) to a flake
    fn from_samples(samples: [f64; 4]) -> Self {
        Self {
            left: samples[0] * 100.0,
            size: 2.0 + samples[1] * 4.0,
            duration: 6.0 + samples[2] * 8.0,
            delay: samples[3] * -14.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.1}%; width: {:.1}px; height: {:.1}px; animation-duration: {:.1}s; animation-delay: {:.1}s;",
            self.left, self.size, self.size, self.duration, self.delay
        )
    }
}

fn random_flakes() -> Vec<Flake> {
    (0..FLAKES)
        .map(|_| {
            Flake::from_samples([
                js_sys::Math::random(),
                js_sys::Math::random(),
                js_sys::Math::random(),
                js_sys::Math::random(),
            ])
        })
        .collect()
}

#[component]
pub fn SeasonalEffectView(#[prop(into)] effect: Signal<SeasonalEffect>) -> impl IntoView {
    let month = chrono::Local::now().month();
    let flakes = StoredValue::new(random_flakes());

    view! {
        <Show when=move || effect.get().is_active(month)>
            <div class="snow-layer" aria-hidden="true">
                {flakes.get_value().into_iter().map(|flake| {
                    view! { <span class="snowflake" style=flake.style()></span> }
                }).collect_view()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flake_from_samples() {
        let flake = Flake::from_samples([0.5, 0.0, 1.0, 0.5]);
        assert_eq!(flake.left, 50.0);
        assert_eq!(flake.size, 2.0);
        assert_eq!(flake.duration, 14.0);
        assert!(flake.style().starts_with("left: 50.0%;"));
    }
}
