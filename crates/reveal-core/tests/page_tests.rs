// Whole-page wiring: frames drive the flow and the backdrop, events fire
// due timers first, resize is debounced.

mod support;

use glam::Vec2;
use reveal_core::*;
use support::*;

struct Harness {
    page: Page,
    surface: RecordingSurface,
    stage: RecordingStage,
    control: RecordingControl,
}

impl Harness {
    fn new(viewport: Bounds) -> Self {
        let page = Page::new(PageConfig::default(), 6, viewport, 2024).unwrap();
        let mut stage = RecordingStage::new(6);
        page.mount(&mut stage);
        Self {
            page,
            surface: RecordingSurface::default(),
            stage,
            control: RecordingControl::default(),
        }
    }

    fn frame(&mut self, at: u64) {
        self.surface.ops.clear();
        self.page
            .frame(ms(at), &mut self.surface, &mut self.stage, &mut self.control);
    }

    fn tap(&mut self, at: u64) -> Step {
        self.page.interact(ms(at), &mut self.stage)
    }
}

#[test]
fn rejects_a_single_scene_page() {
    assert!(Page::new(PageConfig::default(), 1, Bounds::new(800.0, 600.0), 0).is_err());
}

#[test]
fn frame_draws_the_backdrop() {
    let mut h = Harness::new(Bounds::new(1440.0, 900.0));
    h.frame(16);
    assert_eq!(h.surface.ops[0], Draw::Clear(Bounds::new(1440.0, 900.0)));
    assert_eq!(h.surface.discs(), 50);
}

#[test]
fn tap_between_frames_sees_expired_timers() {
    let mut h = Harness::new(Bounds::new(1024.0, 768.0));
    assert!(h.tap(0).started());
    // No frame ran since, but the choreography is over by 800ms.
    assert_eq!(h.tap(800), Step::Started { from: 1, to: 2 });
}

#[test]
fn full_walkthrough_ends_on_success() {
    let mut h = Harness::new(Bounds::new(1024.0, 768.0));
    let mut t = 0;
    for _ in 0..3 {
        assert!(h.tap(t).started());
        t += 800;
        h.frame(t);
    }
    assert_eq!(h.page.flow().cursor(), 3);

    // Scene 3 was shown at t - 300 and moves on 4000ms later.
    h.frame(t - 300 + 4_000);
    assert_eq!(h.page.flow().cursor(), 4);
    t = t - 300 + 4_800;
    h.frame(t);
    assert_eq!(h.tap(t), Step::Ignored(Refusal::Terminal));

    // Decline dodges and leaves the flow alone.
    let r = h.page.decline(
        ms(t),
        Vec2::new(400.0, 300.0),
        Vec2::new(110.0, 44.0),
        Bounds::new(1024.0, 768.0),
        &mut h.control,
    );
    assert_eq!(h.control.position, Some(r.position));
    assert_eq!(h.page.flow().cursor(), 4);

    assert_eq!(h.page.accept(ms(t), &mut h.stage), Ok(Step::Started { from: 4, to: 5 }));
    h.frame(t + 800);
    assert_eq!(h.stage.visible(), vec![5]);
    assert!(!h.stage.blur);
    assert_eq!(h.page.flow().phase(), Phase::Idle);
}

#[test]
fn resize_rebuilds_after_the_quiet_period() {
    let mut h = Harness::new(Bounds::new(1280.0, 800.0));
    h.frame(0);
    h.page.viewport_changed(ms(10), Bounds::new(900.0, 700.0));
    h.page.viewport_changed(ms(100), Bounds::new(600.0, 700.0));

    h.frame(349);
    assert_eq!(h.page.field().bounds(), Bounds::new(1280.0, 800.0));

    h.frame(350);
    assert_eq!(h.page.field().bounds(), Bounds::new(600.0, 700.0));
    assert_eq!(h.page.field().particles().len(), 30);
    assert_eq!(h.surface.ops[0], Draw::Clear(Bounds::new(600.0, 700.0)));
}

#[test]
fn double_tap_guard_is_forwarded() {
    let mut h = Harness::new(Bounds::new(390.0, 844.0));
    assert!(!h.page.touch_end(ms(1_000)));
    assert!(h.page.touch_end(ms(1_200)));
    assert!(!h.page.touch_end(ms(2_000)));
}
