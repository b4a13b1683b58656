//! Cola de toasts con caducidad.
//!
//! El tiempo llega desde fuera (`ctx.input(|i| i.time)`), así que la cola no
//! depende del reloj del sistema y funciona igual en WASM.

use crate::model::Notification;
use std::collections::VecDeque;

/// Segundos que un toast permanece en pantalla
pub const TOAST_DURATION: f64 = 4.0;
/// Segundos de fundido de entrada y salida
pub const FADE_DURATION: f64 = 0.3;
/// Toasts visibles a la vez
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: VecDeque<Notification>,
    active: Vec<(Notification, f64)>,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    /// Caduca los toasts viejos, promociona pendientes y devuelve los visibles con su alpha
    pub fn tick(&mut self, now: f64) -> Vec<(Notification, f32)> {
        self.active.retain(|(_, start)| now - start <= TOAST_DURATION);
        while self.active.len() < MAX_VISIBLE {
            match self.pending.pop_front() {
                Some(n) => self.active.push((n, now)),
                None => break,
            }
        }
        self.active
            .iter()
            .map(|(n, start)| (n.clone(), fade_alpha(now - start)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn fade_alpha(elapsed: f64) -> f32 {
    let alpha = if elapsed < FADE_DURATION {
        elapsed / FADE_DURATION
    } else if elapsed > TOAST_DURATION - FADE_DURATION {
        (TOAST_DURATION - elapsed) / FADE_DURATION
    } else {
        1.0
    };
    alpha.clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(title: &str) -> Notification {
        Notification::success(title, "")
    }

    #[test]
    fn shows_at_most_three_in_order() {
        let mut q = ToastQueue::default();
        for t in ["a", "b", "c", "d"] {
            q.push(toast(t));
        }
        let visible = q.tick(0.0);
        let titles: Vec<_> = visible.iter().map(|(n, _)| n.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn expired_toasts_make_room() {
        let mut q = ToastQueue::default();
        for t in ["a", "b", "c", "d"] {
            q.push(toast(t));
        }
        q.tick(0.0);
        let visible = q.tick(TOAST_DURATION + 0.1);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.title, "d");

        assert!(q.tick(2.0 * TOAST_DURATION + 0.2).is_empty());
        assert!(q.is_empty());
    }

    #[test]
    fn fades_in_and_out() {
        assert_eq!(fade_alpha(0.0), 0.0);
        assert_eq!(fade_alpha(TOAST_DURATION / 2.0), 1.0);
        assert!(fade_alpha(TOAST_DURATION - 0.1) < 0.5);
        assert_eq!(fade_alpha(TOAST_DURATION + 1.0), 0.0);
    }
}
