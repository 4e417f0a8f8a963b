//! Browser binding: scroll watching, the frame loop, and style writes.
//!
//! Everything above this module is pure and clock-driven; this is the only
//! place that touches `web_sys`. Each mounted effect owns one [`FrameLoop`]
//! whose `requestAnimationFrame` chain runs only while its timeline has
//! work, and a scroll listener that feeds the trigger gate. Handles tear
//! down idempotently so Yew effect cleanups can run them exactly once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, SvgPathElement};

use super::confetti::{
    burst_specs, schedule_line_draw, schedule_particle, ParticleFrame, DRAW_DURATION,
};
use super::group::{
    bob_sink, sink, BobSink, FloatConfig, FloatLoop, RevealConfig, RevealGroup, StateSink,
    VisualState,
};
use super::metric::{Metric, MetricDisplay, MetricPanel, metric_sink};
use super::timeline::Timeline;
use super::trigger::{Crossing, StartOffset, TriggerGate};
use super::ease::Ease;
use super::timeline::Tween;

/// Random source for trajectories and stagger orders.
fn js_rng() -> impl FnMut() -> f64 {
    || js_sys::Math::random()
}

struct FrameLoopInner {
    timeline: RefCell<Timeline>,
    running: Cell<bool>,
    stopped: Cell<bool>,
    /// Id of the queued animation frame, if one is pending.
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

/// Demand-driven `requestAnimationFrame` chain over one [`Timeline`].
///
/// The chain is rescheduled only while the timeline has active tweens, so an
/// idle section costs nothing per frame.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    pub fn new() -> Self {
        let inner = Rc::new(FrameLoopInner {
            timeline: RefCell::new(Timeline::new()),
            running: Cell::new(false),
            stopped: Cell::new(false),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let tick = Closure::wrap(Box::new(move |now: f64| {
            let Some(inner) = weak.upgrade() else { return };
            inner.pending.set(None);
            if inner.stopped.get() {
                inner.running.set(false);
                return;
            }
            inner.timeline.borrow_mut().tick(now);
            if inner.timeline.borrow().is_idle() {
                inner.running.set(false);
            } else {
                request_frame(&inner);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.tick.borrow_mut() = Some(tick);
        Self { inner }
    }

    /// Mutate the timeline, then make sure the frame chain is running if it
    /// now has work.
    pub fn with_timeline(&self, f: impl FnOnce(&mut Timeline)) {
        f(&mut self.inner.timeline.borrow_mut());
        if !self.inner.stopped.get()
            && !self.inner.running.get()
            && !self.inner.timeline.borrow().is_idle()
        {
            self.inner.running.set(true);
            request_frame(&self.inner);
        }
    }

    /// Clear the timeline and cancel any queued frame. The tick closure is
    /// owned by this loop, so nothing scheduled can outlive the handle.
    pub fn stop(&self) {
        self.inner.stopped.set(true);
        self.inner.running.set(false);
        self.inner.timeline.borrow_mut().clear();
        if let (Some(win), Some(id)) = (window(), self.inner.pending.take()) {
            let _ = win.cancel_animation_frame(id);
        }
    }
}

fn request_frame(inner: &FrameLoopInner) {
    let tick = inner.tick.borrow();
    if let (Some(win), Some(tick)) = (window(), tick.as_ref()) {
        if let Ok(id) = win.request_animation_frame(tick.as_ref().unchecked_ref()) {
            inner.pending.set(Some(id));
        }
    }
}

/// Write a pose onto an element's inline style.
fn apply_state(el: &HtmlElement, state: &VisualState) {
    let style = el.style();
    let _ = style.set_property(
        "transform",
        &format!(
            "translate({:.2}px, {:.2}px) scale({:.4}) rotate({:.2}deg)",
            state.x, state.y, state.scale, state.rotation
        ),
    );
    let _ = style.set_property("opacity", &format!("{:.3}", state.opacity));
}

/// Sink writing poses to one element, or `None` for non-HTML nodes.
fn style_sink(el: &Element) -> Option<StateSink> {
    let html = el.dyn_ref::<HtmlElement>()?.clone();
    Some(sink(move |state: &VisualState| apply_state(&html, state)))
}

fn collect_sinks(members: &[Element]) -> Vec<StateSink> {
    members
        .iter()
        .filter_map(|el| {
            let s = style_sink(el);
            if s.is_none() && cfg!(debug_assertions) {
                log::warn!("reveal member is not an HtmlElement, skipping");
            }
            s
        })
        .collect()
}

/// Every element under `root` matching `selector`, in document order.
pub fn elements_in(root: &Element, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Entrance options for one section's reveal group.
#[derive(Clone, Copy)]
pub struct RevealOptions {
    pub config: RevealConfig,
    pub start: StartOffset,
    /// Re-hide and re-arm when the trigger scrolls back above the line.
    pub replay: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { config: RevealConfig::default(), start: StartOffset::default(), replay: false }
    }
}

struct WatcherInner {
    listener: Closure<dyn FnMut()>,
    frames: FrameLoop,
}

/// Handle over one mounted trigger. Dropping it (or calling [`teardown`])
/// removes the scroll listener and stops the frame loop; afterwards no
/// element the group referenced is ever mutated again.
///
/// [`teardown`]: RevealHandle::teardown
pub struct RevealHandle {
    inner: Option<WatcherInner>,
}

impl RevealHandle {
    pub fn teardown(&mut self) {
        if let Some(inner) = self.inner.take() {
            if let Some(win) = window() {
                let _ = win.remove_event_listener_with_callback(
                    "scroll",
                    inner.listener.as_ref().unchecked_ref(),
                );
            }
            inner.frames.stop();
        }
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Attach a scroll watcher that feeds `on_crossing` discrete crossings of
/// the trigger element's activation line. Checks once immediately, so
/// content already in view at mount fires without any scrolling.
fn watch_trigger(
    trigger: Element,
    start: StartOffset,
    replay: bool,
    mut on_crossing: impl FnMut(Crossing) + 'static,
) -> RevealHandle {
    let gate = Rc::new(RefCell::new(TriggerGate::new(replay)));
    let check: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(move || {
        let top = trigger.get_bounding_client_rect().top();
        let past = start.crossed(top, viewport_height());
        if let Some(crossing) = gate.borrow_mut().observe(past) {
            on_crossing(crossing);
        }
    }));

    (check.borrow_mut())();

    let listener = {
        let check = check.clone();
        Closure::wrap(Box::new(move || (check.borrow_mut())()) as Box<dyn FnMut()>)
    };
    if let Some(win) = window() {
        let _ = win
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
    }

    RevealHandle { inner: Some(WatcherInner { listener, frames: FrameLoop::new() }) }
}

/// Mount a staggered entrance over `members`, triggered when `trigger`
/// crosses the activation line.
pub fn mount_reveal_group(
    trigger: Element,
    members: Vec<Element>,
    options: RevealOptions,
) -> RevealHandle {
    mount_reveal_group_with(trigger, members, options, |_| {})
}

/// Like [`mount_reveal_group`], with a hook that runs once per `Enter` for
/// extra scheduling on the same timeline (confetti, delayed popups).
pub fn mount_reveal_group_with(
    trigger: Element,
    members: Vec<Element>,
    options: RevealOptions,
    mut on_enter: impl FnMut(&mut Timeline) + 'static,
) -> RevealHandle {
    let mut group = RevealGroup::new(options.config, collect_sinks(&members));
    group.prime();

    let frames = FrameLoop::new();
    let loop_for_crossings = frames.clone();
    let mut handle = watch_trigger(trigger, options.start, options.replay, move |crossing| {
        match crossing {
            Crossing::Enter => loop_for_crossings.with_timeline(|tl| {
                group.play(tl);
                on_enter(tl);
            }),
            Crossing::LeaveBack => loop_for_crossings.with_timeline(|tl| {
                group.release(tl);
                group.prime();
                group.rearm();
            }),
        }
    });
    if let Some(inner) = handle.inner.as_mut() {
        inner.frames = frames;
    }
    handle
}

/// One metric's DOM targets: the text readout and the bar fill.
pub struct MetricTarget {
    pub target: f64,
    pub value_el: Element,
    pub bar_el: Element,
}

fn metric_dom_sink(target: MetricTarget) -> Metric {
    let value_el = target.value_el;
    let bar: Option<HtmlElement> = target.bar_el.dyn_into().ok();
    let sink = metric_sink(move |display: &MetricDisplay| {
        value_el.set_text_content(Some(&display.text));
        if let Some(bar) = &bar {
            let _ = bar
                .style()
                .set_property("width", &format!("{:.2}%", display.bar_frac * 100.0));
        }
    });
    Metric { target: target.target, sink }
}

/// Mount the replayable count-up panel: counts up on every `Enter`, snaps
/// back to zero on every `LeaveBack`.
pub fn mount_replayable_metrics(
    trigger: Element,
    targets: Vec<MetricTarget>,
    start: StartOffset,
) -> RevealHandle {
    let mut panel = MetricPanel::new(targets.into_iter().map(metric_dom_sink).collect());
    panel.prime();

    let frames = FrameLoop::new();
    let loop_for_crossings = frames.clone();
    let mut handle = watch_trigger(trigger, start, true, move |crossing| match crossing {
        Crossing::Enter => loop_for_crossings.with_timeline(|tl| panel.play(tl)),
        Crossing::LeaveBack => loop_for_crossings.with_timeline(|tl| panel.reset(tl)),
    });
    if let Some(inner) = handle.inner.as_mut() {
        inner.frames = frames;
    }
    handle
}

/// Particles released when the bridge stroke lands.
const BRIDGE_BURST: usize = 8;

/// Mount the line-draw sweep over an SVG `path`: primed fully dashed out at
/// mount, swept into view on the first `Enter`, then `host` erupts in a
/// small particle burst timed to the moment the stroke lands. Runs once.
pub fn mount_bridge_draw(trigger: Element, path: Element, host: Element) -> RevealHandle {
    let Ok(path) = path.dyn_into::<SvgPathElement>() else {
        if cfg!(debug_assertions) {
            log::warn!("bridge target is not an SVG path, skipping");
        }
        return RevealHandle { inner: None };
    };
    let length = f64::from(path.get_total_length());
    let style = path.style();
    let _ = style.set_property("stroke-dasharray", &format!("{length:.2}"));
    let _ = style.set_property("stroke-dashoffset", &format!("{length:.2}"));

    let frames = FrameLoop::new();
    let loop_for_crossings = frames.clone();
    let start = StartOffset::parse("top 60%").unwrap_or_default();
    let mut handle = watch_trigger(trigger, start, false, move |crossing| {
        if let Crossing::Enter = crossing {
            loop_for_crossings.with_timeline(|tl| {
                let path = path.clone();
                schedule_line_draw(length, tl, move |offset| {
                    let _ = path
                        .style()
                        .set_property("stroke-dashoffset", &format!("{offset:.2}"));
                });
                schedule_confetti(&host, BRIDGE_BURST, DRAW_DURATION, tl);
            });
        }
    });
    if let Some(inner) = handle.inner.as_mut() {
        inner.frames = frames;
    }
    handle
}

/// Handle over an idle floating loop. Must be torn down on unmount or the
/// loop's frame chain keeps running.
pub struct FloatHandle {
    frames: FrameLoop,
    float: Option<FloatLoop>,
}

impl FloatHandle {
    pub fn teardown(&mut self) {
        if let Some(mut float) = self.float.take() {
            self.frames.with_timeline(|tl| float.stop(tl));
            self.frames.stop();
        }
    }
}

impl Drop for FloatHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Start a gentle, endlessly repeating bob over `members`, staggered in a
/// random-but-fixed order. Runs from mount; no trigger.
///
/// The loop writes only a vertical translate. Members must not double as
/// reveal group members; sections float a dedicated wrapper (or a leaf
/// decoration) so the two effects never share an element.
pub fn mount_float_loop(members: Vec<Element>, config: FloatConfig) -> FloatHandle {
    let sinks: Vec<BobSink> = members
        .iter()
        .filter_map(|el| {
            let html = el.dyn_ref::<HtmlElement>()?.clone();
            Some(bob_sink(move |y: f64| {
                let _ = html
                    .style()
                    .set_property("transform", &format!("translateY({y:.2}px)"));
            }))
        })
        .collect();
    let frames = FrameLoop::new();
    let mut float = None;
    frames.with_timeline(|tl| {
        float = Some(FloatLoop::start(&sinks, config, tl, &mut js_rng()));
    });
    FloatHandle { frames, float }
}

/// Schedule a confetti burst inside `host`, starting `delay` milliseconds
/// from now. Particle nodes are created here, animated on `timeline`, and
/// removed from the DOM when their flight ends.
pub fn schedule_confetti(host: &Element, count: usize, delay: f64, timeline: &mut Timeline) {
    let Some(document) = window().and_then(|w| w.document()) else { return };
    for mut spec in burst_specs(count, &mut js_rng()) {
        spec.delay += delay;
        let Ok(node) = document.create_element("div") else { continue };
        let Ok(particle) = node.dyn_into::<HtmlElement>() else { continue };
        let style = particle.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("left", "50%");
        let _ = style.set_property("top", "50%");
        let _ = style.set_property("width", "8px");
        let _ = style.set_property("height", "8px");
        let _ = style.set_property("border-radius", "2px");
        let _ = style.set_property("background", spec.color);
        let _ = style.set_property("pointer-events", "none");
        let _ = host.append_child(&particle);

        let flying = particle.clone();
        schedule_particle(
            spec,
            timeline,
            move |frame: &ParticleFrame| {
                let style = flying.style();
                let _ = style.set_property(
                    "transform",
                    &format!(
                        "translate({:.2}px, {:.2}px) rotate({:.2}deg)",
                        frame.x, frame.y, frame.rotation
                    ),
                );
                let _ = style.set_property("opacity", &format!("{:.3}", frame.opacity));
            },
            move || particle.remove(),
        );
    }
}

/// Schedule a popup entrance: scaled to nothing and tilted, then springing
/// to rest with an overshoot after `delay` milliseconds.
pub fn schedule_pop_in(el: &Element, delay: f64, timeline: &mut Timeline) {
    let Some(target) = style_sink(el) else { return };
    let hidden = VisualState::visible().with_scale(0.0).with_rotation(-10.0).with_opacity(0.0);
    let shown = VisualState::visible();
    (target.borrow_mut())(&hidden);
    timeline.add(
        Tween::new(600.0, Ease::BackOut { overshoot: 1.7 }, move |t| {
            (target.borrow_mut())(&hidden.lerp(&shown, t));
        })
        .delay(delay),
    );
}
