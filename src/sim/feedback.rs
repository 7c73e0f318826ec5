//! Floating combat text lifecycle

use super::state::FloatingText;

/// Age every text by `dt`, damp its rise speed, and drop expired ones.
///
/// Damping is per call, not scaled by `dt`.
pub fn decay_texts(texts: &mut Vec<FloatingText>, dt: f32, damping: f32) {
    for text in texts.iter_mut() {
        text.life -= dt;
        text.velocity_y *= damping;
    }
    texts.retain(|t| t.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::TextColor;
    use glam::Vec2;

    fn text(id: u32, life: f32) -> FloatingText {
        FloatingText {
            id,
            pos: Vec2::ZERO,
            text: "20".into(),
            color: TextColor::Damage,
            life,
            velocity_y: 3.0,
        }
    }

    #[test]
    fn test_decay_and_damping() {
        let mut texts = vec![text(1, 0.8)];
        decay_texts(&mut texts, 0.1, 0.9);
        assert!((texts[0].life - 0.7).abs() < 1e-6);
        assert!((texts[0].velocity_y - 2.7).abs() < 1e-6);
    }

    #[test]
    fn test_expired_removed_exactly_at_zero() {
        let mut texts = vec![text(1, 0.25), text(2, 0.05), text(3, 1.0)];
        decay_texts(&mut texts, 0.25, 0.9);
        let ids: Vec<u32> = texts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3]);
    }
}
