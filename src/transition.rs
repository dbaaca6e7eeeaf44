use crate::scale::Orientation;

/// Screen position inside the plot area.
pub type Position = (f64, f64);

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// Cubic ease-in-out: slow start, fast middle, slow finish.
/// `t` is clamped to `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn lerp(a: Position, b: Position, k: f64) -> Position {
    (a.0 + (b.0 - a.0) * k, a.1 + (b.1 - a.1) * k)
}

// ---------------------------------------------------------------------------
// Transition – one timed move of every point
// ---------------------------------------------------------------------------

/// A single in-flight re-layout.  Times are seconds on the caller's clock.
#[derive(Debug, Clone)]
pub struct Transition {
    pub generation: u64,
    pub orientation: Orientation,
    start: Vec<Position>,
    target: Vec<Position>,
    started_at: f64,
    duration: f64,
    /// Per-point "end" already reported.
    ended: Vec<bool>,
}

impl Transition {
    fn new(
        generation: u64,
        orientation: Orientation,
        start: Vec<Position>,
        target: Vec<Position>,
        started_at: f64,
        duration: f64,
    ) -> Self {
        let ended = vec![false; target.len()];
        Transition {
            generation,
            orientation,
            start,
            target,
            started_at,
            duration,
            ended,
        }
    }

    /// Linear progress in `[0, 1]` at time `now`.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn positions_at(&self, now: f64) -> Vec<Position> {
        let k = ease_in_out_cubic(self.progress(now));
        self.start
            .iter()
            .zip(&self.target)
            .map(|(&a, &b)| lerp(a, b, k))
            .collect()
    }

    /// Mark points whose move has finished and return how many ended
    /// during this call.
    fn take_ended(&mut self, now: f64) -> usize {
        if self.progress(now) < 1.0 {
            return 0;
        }
        let newly = self.ended.iter().filter(|done| !**done).count();
        self.ended.iter_mut().for_each(|done| *done = true);
        newly
    }
}

// ---------------------------------------------------------------------------
// Animator – orientation toggle with preemptible transitions
// ---------------------------------------------------------------------------

/// Emitted once per completed transition: the x axis labels should now be
/// redrawn for `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRedraw {
    pub generation: u64,
    pub orientation: Orientation,
}

/// What to draw for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub positions: Vec<Position>,
    pub axis_redraw: Option<AxisRedraw>,
    /// A transition is still running; schedule another frame.
    pub animating: bool,
}

/// Owns the orientation toggle and the point positions it drives.
///
/// Every [`toggle`](Self::toggle) bumps the generation token and replaces
/// the running transition, starting from the live positions.  Completion of
/// a transition yields exactly one [`AxisRedraw`], and only for the newest
/// generation.
#[derive(Debug, Clone)]
pub struct Animator {
    orientation: Orientation,
    generation: u64,
    duration: f64,
    resting: Vec<Position>,
    active: Option<Transition>,
    /// Generation whose axis redraw has already fired.
    redrawn: Option<u64>,
}

impl Animator {
    pub fn new(resting: Vec<Position>, duration: f64) -> Self {
        Animator {
            orientation: Orientation::Normal,
            generation: 0,
            duration,
            resting,
            active: None,
            redrawn: None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Where every point is at `now`, mid-flight or at rest.
    pub fn positions_at(&self, now: f64) -> Vec<Position> {
        match &self.active {
            Some(tr) => tr.positions_at(now),
            None => self.resting.clone(),
        }
    }

    /// Flip the orientation and start moving every point towards the
    /// targets `retarget` computes for the new orientation.
    ///
    /// A transition already in flight is dropped together with its pending
    /// completion; its live positions become the new start.
    pub fn toggle<F>(&mut self, now: f64, retarget: F) -> u64
    where
        F: FnOnce(Orientation) -> Vec<Position>,
    {
        let start = self.positions_at(now);
        if let Some(old) = self.active.take() {
            log::debug!(
                "transition {} towards {} preempted at {:.0}%",
                old.generation,
                old.orientation,
                old.progress(now) * 100.0
            );
        }

        self.orientation = self.orientation.flipped();
        self.generation += 1;
        let target = retarget(self.orientation);
        log::debug!(
            "transition {} started towards {} orientation ({} points)",
            self.generation,
            self.orientation,
            target.len()
        );

        self.active = Some(Transition::new(
            self.generation,
            self.orientation,
            start,
            target,
            now,
            self.duration,
        ));
        self.generation
    }

    /// Completion callback for one point of transition `generation`.
    ///
    /// Returns the axis redraw the first time it is called for the current
    /// generation and `None` for every repeat or stale generation.
    pub fn complete(&mut self, generation: u64) -> Option<AxisRedraw> {
        if generation != self.generation {
            log::debug!(
                "ignoring completion of transition {generation}, current is {}",
                self.generation
            );
            return None;
        }
        if self.redrawn == Some(generation) {
            return None;
        }
        self.redrawn = Some(generation);
        log::debug!("axis redraw for transition {generation} ({})", self.orientation);
        Some(AxisRedraw {
            generation,
            orientation: self.orientation,
        })
    }

    /// Advance to `now`: sample positions and deliver point completions.
    pub fn tick(&mut self, now: f64) -> Frame {
        let Some(tr) = self.active.as_mut() else {
            return Frame {
                positions: self.resting.clone(),
                axis_redraw: None,
                animating: false,
            };
        };

        let positions = tr.positions_at(now);
        let generation = tr.generation;
        let mut ends = tr.take_ended(now);
        let finished = tr.progress(now) >= 1.0;
        if finished && tr.target.is_empty() {
            ends = 1;
        }

        let mut axis_redraw = None;
        for _ in 0..ends {
            if let Some(redraw) = self.complete(generation) {
                axis_redraw = Some(redraw);
            }
        }

        if finished {
            if let Some(done) = self.active.take() {
                self.resting = done.target;
            }
        }

        Frame {
            positions,
            axis_redraw,
            animating: !finished,
        }
    }
}

#[cfg(test)]
impl Transition {
    pub fn start_positions(&self) -> &[Position] {
        &self.start
    }
}

#[cfg(test)]
impl Animator {
    pub fn active(&self) -> Option<&Transition> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn mirror(width: f64, xs: &[f64]) -> impl Fn(Orientation) -> Vec<Position> + '_ {
        move |o| {
            xs.iter()
                .map(|&x| match o {
                    Orientation::Normal => (x, 10.0),
                    Orientation::Reversed => (width - x, 10.0),
                })
                .collect()
        }
    }

    #[test]
    fn easing_endpoints_and_symmetry() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < EPS);
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let sum = ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t);
            assert!((sum - 1.0).abs() < EPS, "not symmetric at {t}");
        }
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out_cubic(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn transition_interpolates_with_easing() {
        let xs = [0.0, 100.0];
        let mut anim = Animator::new(mirror(100.0, &xs)(Orientation::Normal), 2.0);
        anim.toggle(0.0, mirror(100.0, &xs));

        let half = anim.tick(1.0);
        assert!(half.animating);
        assert!(half.axis_redraw.is_none());
        assert!((half.positions[0].0 - 50.0).abs() < EPS);

        // A quarter of the way in time is 1/16 of the way in space.
        let quarter = anim.positions_at(0.5);
        assert!((quarter[0].0 - 100.0 / 16.0).abs() < EPS);
        assert!((quarter[1].0 - (100.0 - 100.0 / 16.0)).abs() < EPS);
        assert_eq!(quarter[0].1, 10.0);
    }

    #[test]
    fn completion_redraws_axis_exactly_once() {
        let xs: Vec<f64> = (0..500).map(|i| i as f64).collect();
        let mut anim = Animator::new(mirror(499.0, &xs)(Orientation::Normal), 2.0);
        let generation = anim.toggle(0.0, mirror(499.0, &xs));

        let done = anim.tick(2.0);
        assert!(!done.animating);
        assert_eq!(
            done.axis_redraw,
            Some(AxisRedraw { generation, orientation: Orientation::Reversed })
        );
        assert!((done.positions[0].0 - 499.0).abs() < EPS);

        // Later frames and late callbacks stay quiet.
        assert_eq!(anim.tick(2.5).axis_redraw, None);
        assert_eq!(anim.complete(generation), None);
        assert!(!anim.is_animating());
        assert!((anim.positions_at(10.0)[0].0 - 499.0).abs() < EPS);
    }

    #[test]
    fn preemption_starts_from_live_positions() {
        let xs = [0.0, 40.0];
        let mut anim = Animator::new(mirror(100.0, &xs)(Orientation::Normal), 2.0);
        anim.toggle(0.0, mirror(100.0, &xs));

        let live = anim.positions_at(1.0);
        anim.toggle(1.0, mirror(100.0, &xs));
        let tr = anim.active().unwrap();
        assert_eq!(tr.start_positions(), live.as_slice());
        assert_eq!(tr.orientation, Orientation::Normal);
        assert!((tr.start_positions()[0].0 - 50.0).abs() < EPS);
    }

    #[test]
    fn preempted_transition_never_redraws() {
        let xs = [0.0, 25.0, 75.0];
        let mut anim = Animator::new(mirror(100.0, &xs)(Orientation::Normal), 2.0);
        let first = anim.toggle(0.0, mirror(100.0, &xs));
        anim.tick(1.0);
        let second = anim.toggle(1.0, mirror(100.0, &xs));
        assert_eq!(second, first + 1);

        let mut redraws = Vec::new();
        let mut now = 1.0;
        while now <= 4.0 {
            if let Some(r) = anim.tick(now).axis_redraw {
                redraws.push(r);
            }
            now += 1.0 / 60.0;
        }
        // Stale callback from the first transition arriving late.
        assert_eq!(anim.complete(first), None);

        assert_eq!(
            redraws,
            vec![AxisRedraw { generation: second, orientation: Orientation::Normal }]
        );
        let rest = anim.positions_at(5.0);
        assert!((rest[1].0 - 25.0).abs() < EPS);
    }

    #[test]
    fn double_toggle_round_trips_orientation() {
        let mut anim = Animator::new(vec![(0.0, 0.0)], 2.0);
        anim.toggle(0.0, |_| vec![(1.0, 0.0)]);
        assert_eq!(anim.orientation(), Orientation::Reversed);
        anim.toggle(0.1, |_| vec![(0.0, 0.0)]);
        assert_eq!(anim.orientation(), Orientation::Normal);
        assert_eq!(anim.generation(), 2);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut anim = Animator::new(vec![(0.0, 0.0)], 0.0);
        let generation = anim.toggle(3.0, |_| vec![(9.0, 0.0)]);
        let frame = anim.tick(3.0);
        assert_eq!(frame.positions, vec![(9.0, 0.0)]);
        assert_eq!(frame.axis_redraw.map(|r| r.generation), Some(generation));
    }
}
