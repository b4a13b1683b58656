use geometry_quest::model::{AchievementId, NotificationKind};
use geometry_quest::session::{RETRY_PROMPT, WRONG_TITLE};
use geometry_quest::{Catalog, Session};

fn catalog() -> Catalog {
    Catalog::embedded().expect("catálogo válido")
}

#[test]
fn full_run_without_mistakes_unlocks_everything() {
    let c = catalog();
    let mut s = Session::default();
    let mut unlocks = Vec::new();

    for idx in 0..c.len() {
        assert_eq!(s.current_level, idx);
        let correct = c.levels[idx].correct_answer;
        let step = s.select_answer(&c, correct).session.check(&c);
        unlocks.extend(
            step.notifications
                .iter()
                .filter(|n| n.kind == NotificationKind::Achievement)
                .map(|n| n.title.clone()),
        );
        s = step.session.next_level(&c).session;
    }

    // 10 + 10 + 20 + 10 + 30 + 20
    assert_eq!(s.score, 100);
    assert_eq!(s.streak, 6);
    assert_eq!(s.completed.len(), 6);
    assert_eq!(s.current_level, c.last_index());
    assert!(s.achievements.iter().all(|a| a.unlocked));
    assert_eq!(unlocks.len(), 4);
}

#[test]
fn mistake_breaks_the_streak_but_not_the_score() {
    let c = catalog();
    let s = Session::default();
    let s = s.select_answer(&c, 0).session.check(&c).session;
    let s = s.next_level(&c).session;

    let step = s.select_answer(&c, 0).session.check(&c);
    assert_eq!(step.notifications.len(), 1);
    assert_eq!(step.notifications[0].title, WRONG_TITLE);
    assert_eq!(step.notifications[0].description.as_deref(), Some(RETRY_PROMPT));

    let s = step.session;
    assert_eq!(s.score, 10);
    assert_eq!(s.streak, 0);
    assert!(!s.is_unlocked(AchievementId::ThreeInARow));

    let s = s.retry().session.select_answer(&c, 1).session.check(&c).session;
    assert_eq!(s.score, 20);
    assert_eq!(s.streak, 1);
    assert_eq!(s.completed.len(), 2);
}
