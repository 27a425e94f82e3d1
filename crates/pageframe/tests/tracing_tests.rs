#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Spans and clamp events enabled:
//!   cargo test -p pageframe --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p pageframe --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use pageframe::{Page, Paginator};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedEvent {
    level: tracing::Level,
    fields: HashMap<String, String>,
    span: Option<String>,
}

#[derive(Clone, Default)]
struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

/// A tracing Layer that records span and event metadata.
struct Capture(CaptureHandle);

struct FieldVisitor(HashMap<String, String>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(HashMap::new());
        attrs.record(&mut visitor);
        self.0.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(HashMap::new());
        event.record(&mut visitor);
        let span = ctx
            .event_span(event)
            .map(|span_ref| span_ref.name().to_string());
        self.0.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0,
            span,
        });
    }
}

fn with_capture<F: FnOnce()>(f: F) -> CaptureHandle {
    let handle = CaptureHandle::default();
    let subscriber = tracing_subscriber::registry().with(Capture(handle.clone()));
    tracing::subscriber::with_default(subscriber, f);
    handle
}

// ============================================================================
// Span and event tests (feature = "tracing")
// ============================================================================

#[cfg(feature = "tracing")]
#[test]
fn construction_span_records_inputs() {
    let handle = with_capture(|| {
        let _ = Paginator::new(11, 160, 8, 7);
    });
    let spans = handle.spans();
    let span = spans
        .iter()
        .find(|s| s.name == "paginator_new")
        .expect("paginator_new span");
    assert_eq!(span.fields.get("active_page").map(String::as_str), Some("11"));
    assert_eq!(span.fields.get("items_count").map(String::as_str), Some("160"));
}

#[cfg(feature = "tracing")]
#[test]
fn clamped_inputs_emit_debug_events() {
    let handle = with_capture(|| {
        let _ = Paginator::new(0, 10, 0, 0);
    });
    let clamped: Vec<String> = handle
        .events()
        .into_iter()
        .filter(|e| e.level == tracing::Level::DEBUG)
        .filter_map(|e| e.fields.get("field").cloned())
        .collect();
    assert_eq!(clamped, ["items_on_page", "active_page", "frame_length"]);
}

#[cfg(feature = "tracing")]
#[test]
fn valid_inputs_emit_no_clamp_events() {
    let handle = with_capture(|| {
        let _ = Paginator::new(11, 160, 8, 7);
    });
    assert!(
        handle
            .events()
            .iter()
            .all(|e| e.level != tracing::Level::DEBUG),
        "{:?}",
        handle.events()
    );
}

#[cfg(feature = "tracing")]
#[test]
fn frame_window_traced_inside_construction_span() {
    let handle = with_capture(|| {
        let _ = Paginator::new(8, 15, 2, 3);
    });
    let events = handle.events();
    let window = events
        .iter()
        .find(|e| e.level == tracing::Level::TRACE)
        .expect("frame window event");
    assert_eq!(window.fields.get("frame_start").map(String::as_str), Some("6"));
    assert_eq!(window.span.as_deref(), Some("paginator_new"));
}

#[cfg(feature = "tracing")]
#[test]
fn strict_rejection_warns() {
    let handle = with_capture(|| {
        let _ = Paginator::try_new(2, 10, 10, 10);
    });
    assert!(
        handle
            .events()
            .iter()
            .any(|e| e.level == tracing::Level::WARN)
    );
}

#[cfg(feature = "tracing")]
#[test]
fn render_span_records_page_count() {
    let pager = Paginator::new(11, 150, 3, 5).with_formatter(|p: &Page| p.number().to_string());
    let handle = with_capture(|| {
        let _ = pager.render();
    });
    let spans = handle.spans();
    let span = spans
        .iter()
        .find(|s| s.name == "paginator_render")
        .expect("paginator_render span");
    assert_eq!(span.fields.get("pages").map(String::as_str), Some("5"));
}

// ============================================================================
// Zero-overhead (no feature)
// ============================================================================

#[cfg(not(feature = "tracing"))]
#[test]
fn zero_overhead_emits_nothing() {
    let handle = with_capture(|| {
        let pager = Paginator::new(0, 10, 0, 0).with_formatter(|p: &Page| p.number().to_string());
        let _ = pager.render();
        let _ = Paginator::try_new(2, 10, 10, 10);
    });
    assert!(handle.spans().is_empty());
    assert!(handle.events().is_empty());
}
