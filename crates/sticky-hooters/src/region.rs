//! Region controller
//!
//! A `Region` is one bound container: its resolved configuration, the body,
//! header and footer it found at bind time, the overlays built for them, and
//! the scroll listener that drives them.

use hooters_dom::{DOMRect, Document, DomEvent, EventType, ListenerId, NodeId, Window};

use crate::overlay::{build_overlay, Overlay};
use crate::throttle::Throttle;
use crate::transition::{stick, unstick};
use crate::watcher::{footer_transition, header_transition, is_visible, Geometry, Transition};
use crate::{classes, Config, HooterError, Result, SCROLL_THROTTLE};

/// Which edge a hooter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HooterKind {
    Header,
    Footer,
}

impl HooterKind {
    pub fn is_footer(self) -> bool {
        self == Self::Footer
    }

    /// Configured selector for this kind
    pub fn selector(self, config: &Config) -> &str {
        match self {
            Self::Header => &config.header_selector,
            Self::Footer => &config.footer_selector,
        }
    }

    /// Variant class of the overlay wrapper
    pub fn wrapper_class(self) -> &'static str {
        match self {
            Self::Header => classes::INNER_WRAPPER_HEADER,
            Self::Footer => classes::INNER_WRAPPER_FOOTER,
        }
    }
}

/// A header or footer together with its overlay and stuck flag
#[derive(Debug, Clone)]
pub struct Hooter {
    pub(crate) element: NodeId,
    pub(crate) kind: HooterKind,
    pub(crate) is_stuck: bool,
    pub(crate) overlay: NodeId,
    pub(crate) placeholder: NodeId,
}

impl Hooter {
    fn new(element: NodeId, kind: HooterKind, overlay: Overlay) -> Self {
        Self {
            element,
            kind,
            is_stuck: false,
            overlay: overlay.wrapper,
            placeholder: overlay.placeholder,
        }
    }

    /// The live header/footer element
    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn kind(&self) -> HooterKind {
        self.kind
    }

    pub fn is_stuck(&self) -> bool {
        self.is_stuck
    }

    /// Fixed-position overlay wrapper
    pub fn overlay(&self) -> NodeId {
        self.overlay
    }

    /// Copy that occupies whichever slot the live element is not in
    pub fn placeholder(&self) -> NodeId {
        self.placeholder
    }
}

/// One bound container
#[derive(Debug, Clone)]
pub struct Region {
    container: NodeId,
    wrapper: NodeId,
    is_table: bool,
    body: Option<NodeId>,
    header: Option<Hooter>,
    footer: Option<Hooter>,
    config: Config,
    top: f64,
    bottom: f64,
    scroll_listener: Option<ListenerId>,
    throttle: Throttle<DomEvent>,
}

impl Region {
    /// Locate body, header and footer inside `container`, wrap the container
    /// and build an overlay per present hooter.
    ///
    /// The container is wrapped even when neither header nor footer is
    /// found; such a region is inert.
    pub fn new(doc: &mut Document, container: NodeId, config: Config) -> Result<Self> {
        let tree = &doc.tree;
        let is_table = tree
            .tag_name(container)
            .ok_or(HooterError::UnknownNode(container))?
            == "table";

        let body = tree.query_selector(container, &config.body_selector);
        let footer = tree.query_selector(container, &config.footer_selector);
        let header = tree.query_selector(container, &config.header_selector);

        let wrapper = doc.tree.create_element("div");
        doc.tree.add_class(wrapper, &[classes::OUTER_WRAPPER])?;
        doc.tree.wrap(container, wrapper)?;

        let mut region = Self {
            container,
            wrapper,
            is_table,
            body,
            header: None,
            footer: None,
            top: 0.0,
            bottom: 0.0,
            config,
            scroll_listener: None,
            throttle: Throttle::new(SCROLL_THROTTLE),
        };

        if footer.is_none() && header.is_none() {
            tracing::debug!(?container, "no header or footer found, region is inert");
            return Ok(region);
        }

        if body.is_none() {
            tracing::warn!(
                ?container,
                selector = %region.config.body_selector,
                "body not found; scroll ticks will fail"
            );
        }

        region.top = region.config.top_offset();
        region.bottom = region.config.bottom_offset();

        if let Some(element) = footer {
            region.footer = Some(region.setup_hooter(doc, element, HooterKind::Footer)?);
        }
        if let Some(element) = header {
            region.header = Some(region.setup_hooter(doc, element, HooterKind::Header)?);
        }

        tracing::debug!(
            ?container,
            is_table,
            header = region.header.is_some(),
            footer = region.footer.is_some(),
            "region initialized"
        );
        Ok(region)
    }

    fn setup_hooter(&self, doc: &mut Document, element: NodeId, kind: HooterKind) -> Result<Hooter> {
        let overlay = build_overlay(doc, element, kind, &self.config, self.container, self.is_table)?;
        Ok(Hooter::new(element, kind, overlay))
    }

    /// Whether there is anything to keep sticky
    pub fn is_active(&self) -> bool {
        self.header.is_some() || self.footer.is_some()
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Outer wrapper created around the container
    pub fn wrapper(&self) -> NodeId {
        self.wrapper
    }

    pub fn is_table(&self) -> bool {
        self.is_table
    }

    pub fn body(&self) -> Option<NodeId> {
        self.body
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn header(&self) -> Option<&Hooter> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&Hooter> {
        self.footer.as_ref()
    }

    pub fn hooter(&self, kind: HooterKind) -> Option<&Hooter> {
        match kind {
            HooterKind::Header => self.header.as_ref(),
            HooterKind::Footer => self.footer.as_ref(),
        }
    }

    fn hooter_mut(&mut self, kind: HooterKind) -> Option<&mut Hooter> {
        match kind {
            HooterKind::Header => self.header.as_mut(),
            HooterKind::Footer => self.footer.as_mut(),
        }
    }

    /// Stuck flag of a hooter; false when it does not exist
    pub fn is_stuck(&self, kind: HooterKind) -> bool {
        self.hooter(kind).is_some_and(Hooter::is_stuck)
    }

    /// Overlay wrapper of a hooter
    pub fn overlay(&self, kind: HooterKind) -> Option<NodeId> {
        self.hooter(kind).map(Hooter::overlay)
    }

    pub fn scroll_listener(&self) -> Option<ListenerId> {
        self.scroll_listener
    }

    /// Register the window scroll listener (active regions only)
    pub(crate) fn listen(&mut self, window: &mut Window) -> Option<ListenerId> {
        if self.is_active() && self.scroll_listener.is_none() {
            self.scroll_listener = Some(window.add_event_listener(EventType::Scroll));
        }
        self.scroll_listener
    }

    /// Remove the scroll listener. DOM wrapping and overlays stay in place.
    pub fn tear_down(&mut self, window: &mut Window) -> bool {
        self.throttle.cancel();
        self.scroll_listener
            .take()
            .is_some_and(|id| window.remove_event_listener(id))
    }

    /// Force a hooter into the stuck state. Returns false when absent.
    pub fn stick(&mut self, doc: &mut Document, kind: HooterKind) -> Result<bool> {
        match self.hooter_mut(kind) {
            Some(hooter) => stick(doc, hooter).map(|()| true),
            None => Ok(false),
        }
    }

    /// Force a hooter back in flow. Returns false when absent.
    pub fn unstick(&mut self, doc: &mut Document, kind: HooterKind) -> Result<bool> {
        match self.hooter_mut(kind) {
            Some(hooter) => unstick(doc, hooter).map(|()| true),
            None => Ok(false),
        }
    }

    /// Throttled scroll handler
    pub fn handle_scroll(&mut self, doc: &mut Document, event: &DomEvent) -> Result<()> {
        self.run_timers(doc, event.timestamp)?;
        if let Some(event) = self.throttle.call(event.timestamp, event.clone()) {
            tracing::trace!(timestamp = ?event.timestamp, synthetic = event.synthetic, "scroll tick");
            self.watch_hooters(doc)?;
        }
        Ok(())
    }

    /// Fire a deferred scroll tick if it is due
    pub fn run_timers(&mut self, doc: &mut Document, now: std::time::Duration) -> Result<()> {
        if let Some(event) = self.throttle.poll(now) {
            tracing::trace!(timestamp = ?event.timestamp, "deferred scroll tick");
            self.watch_hooters(doc)?;
        }
        Ok(())
    }

    /// Re-evaluate footer then header against current geometry
    pub fn watch_hooters(&mut self, doc: &mut Document) -> Result<()> {
        self.watch(doc, HooterKind::Footer)?;
        self.watch(doc, HooterKind::Header)
    }

    fn watch(&mut self, doc: &mut Document, kind: HooterKind) -> Result<()> {
        let Some(element) = self.hooter(kind).map(Hooter::element) else {
            return Ok(());
        };

        let body = self
            .body
            .and_then(|b| doc.bounding_client_rect(b))
            .ok_or_else(|| HooterError::MissingBody {
                selector: self.config.body_selector.clone(),
            })?;
        let viewport_height = doc.window.inner_height;
        let container = doc.bounding_client_rect(self.container).unwrap_or_default();

        let geometry = Geometry {
            body,
            hooter: doc.bounding_client_rect(element).unwrap_or_else(DOMRect::new),
            viewport_height,
            offset: match kind {
                HooterKind::Header => self.top,
                HooterKind::Footer => self.bottom,
            },
            container_visible: is_visible(&container, viewport_height),
        };

        let Some(hooter) = self.hooter_mut(kind) else {
            return Ok(());
        };
        let decision = match kind {
            HooterKind::Header => header_transition(hooter.is_stuck, &geometry),
            HooterKind::Footer => footer_transition(hooter.is_stuck, &geometry),
        };

        match decision {
            Some(Transition::Stick) => {
                tracing::trace!(?kind, body_top = body.top(), body_bottom = body.bottom(), "stick");
                stick(doc, hooter)
            }
            Some(Transition::Unstick) => {
                tracing::trace!(?kind, body_top = body.top(), body_bottom = body.bottom(), "unstick");
                unstick(doc, hooter)
            }
            None => Ok(()),
        }
    }
}
