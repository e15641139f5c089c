//! The clock application: scene composition + frame driving.

use chrono::NaiveTime;

use zurvan_engine::coords::Viewport;
use zurvan_engine::core::{App, AppControl, FrameCtx};
use zurvan_engine::paint::Color;
use zurvan_engine::render::shapes::{CircleRenderer, RectRenderer};
use zurvan_engine::scene::DrawList;

use crate::angles::hand_angles;
use crate::timesrc::WallClock;
use crate::{face, hands};

/// Window clear color behind the dial.
const CLEAR_COLOR: Color = Color::from_premul(0.92, 0.92, 0.94, 1.0);

/// Rebuilds the complete scene for one instant: dial, 60 ticks, 3 hands.
///
/// This is the whole view tree; it is recomputed from scratch every tick
/// rather than retained and diffed.
pub fn compose_scene(list: &mut DrawList, region: Viewport, time: NaiveTime) {
    face::compose(list, region);
    hands::compose(list, region, hand_angles(time));
}

/// Analog clock app. Owns the draw list and the shape renderers, and
/// re-renders on every runtime tick (and host-initiated redraws).
pub struct ClockApp<C> {
    clock: C,
    draw_list: DrawList,
    circles: CircleRenderer,
    rects: RectRenderer,
    last_size: Option<(f32, f32)>,
}

impl<C: WallClock> ClockApp<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            draw_list: DrawList::new(),
            circles: CircleRenderer::new(),
            rects: RectRenderer::new(),
            last_size: None,
        }
    }
}

impl<C: WallClock> App for ClockApp<C> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();

        // Geometry log once per size change, replacing the per-frame prints
        // of the original demo.
        if self.last_size != Some((w, h)) {
            log::debug!("clock region is {w}x{h} logical px");
            self.last_size = Some((w, h));
        }

        let now = self.clock.now();
        log::trace!("tick {} at {now}", ctx.time.tick_index);

        self.draw_list.clear();
        compose_scene(&mut self.draw_list, Viewport::new(w, h), now);

        let Self { draw_list, circles, rects, .. } = self;

        // Circles first: the dial is the lowest layer and the rect pass
        // loads on top of it.
        ctx.render(CLEAR_COLOR, |rctx, target| {
            circles.render(rctx, target, draw_list);
            rects.render(rctx, target, draw_list);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zurvan_engine::scene::DrawCmd;

    use crate::timesrc::FixedClock;

    const REGION: Viewport = Viewport::new(300.0, 300.0);

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).expect("valid time")
    }

    #[test]
    fn full_scene_is_dial_plus_ticks_plus_hands() {
        let mut list = DrawList::new();
        compose_scene(&mut list, REGION, t(3, 0, 0));

        // 1 dial circle + 60 ticks + 3 hands.
        assert_eq!(list.items().len(), 64);

        let rects = list
            .items()
            .iter()
            .filter(|it| matches!(it.cmd, DrawCmd::Rect(_)))
            .count();
        assert_eq!(rects, 63);
    }

    #[test]
    fn scene_paints_dial_first_hands_last() {
        let mut list = DrawList::new();
        compose_scene(&mut list, REGION, t(10, 10, 30));

        let painted: Vec<&DrawCmd> = list.iter_in_paint_order().map(|it| &it.cmd).collect();

        assert!(matches!(painted[0], DrawCmd::Circle(_)));
        assert!(matches!(painted[63], DrawCmd::Rect(_)));

        let DrawCmd::Rect(second) = painted[63] else { unreachable!() };
        assert_eq!(second.color.to_straight(), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn identical_times_compose_identical_scenes() {
        let clock = FixedClock(t(6, 30, 0));

        let mut a = DrawList::new();
        let mut b = DrawList::new();
        compose_scene(&mut a, REGION, clock.now());
        compose_scene(&mut b, REGION, clock.now());

        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn degenerate_region_composes_empty_scene() {
        let mut list = DrawList::new();
        compose_scene(&mut list, Viewport::new(0.0, 0.0), t(12, 0, 0));
        assert!(list.is_empty());
    }
}
