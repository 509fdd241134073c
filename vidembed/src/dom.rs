/*!
    Declarative DOM descriptions and the seams the component renders through.
*/

use std::cell::{Cell, RefCell};
use std::fmt::Write as _;
use std::rc::Rc;

use crate::error::Result;
use crate::tracking::TrackingEvent;

/**
    What a rendered node is for, so hosts can find it again.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Placeholder,
    Title,
    PlayButton,
    Video,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Title => "title",
            Self::PlayButton => "play-button",
            Self::Video => "video",
        }
    }
}

/**
    Description of an element to create.
*/
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub role: Option<Role>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    pub fn classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        classes.into_iter().fold(self, |node, class| node.class(class))
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Space-joined class list, as assigned to `className`.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.class_name()));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');

        if is_void(&self.tag) {
            return;
        }
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input" | "source")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/**
    Media element events the component listens for.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
    Playing,
    Suspend,
}

impl MediaEvent {
    /// DOM event type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Ended => "ended",
            Self::Playing => "playing",
            Self::Suspend => "suspend",
        }
    }
}

pub type MediaHandler = Rc<dyn Fn(MediaEvent)>;

/**
    A live media element.
*/
pub trait MediaElement {
    fn play(&self);
    fn pause(&self);
    fn focus(&self);
    /// Playback position in seconds.
    fn current_time(&self) -> f64;
    /// Duration in seconds; `NaN` while unknown.
    fn duration(&self) -> f64;
    fn on(&self, event: MediaEvent, handler: MediaHandler);
}

/**
    The container element a component renders into.
*/
pub trait Host {
    type Media: MediaElement + 'static;

    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn append(&self, node: &Node);
    /// Remove the first child rendered with `role`.
    fn remove(&self, role: Role);
    /// Append the video node and return the live element behind it.
    fn mount_media(&self, node: &Node) -> Result<Rc<Self::Media>>;
    fn on_click(&self, role: Role, handler: Box<dyn Fn()>);
    /// Deliver a tracking event to listeners further up the page.
    fn dispatch(&self, event: &TrackingEvent);
}

/**
    In-memory media element.

    Records calls made on it and lets the caller drive position and events.
*/
pub struct VirtualMedia {
    node: Node,
    playing: Cell<bool>,
    focused: Cell<bool>,
    play_calls: Cell<usize>,
    pause_calls: Cell<usize>,
    current_time: Cell<f64>,
    duration: Cell<f64>,
    handlers: RefCell<Vec<(MediaEvent, MediaHandler)>>,
}

impl VirtualMedia {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            playing: Cell::new(false),
            focused: Cell::new(false),
            play_calls: Cell::new(0),
            pause_calls: Cell::new(0),
            current_time: Cell::new(0.0),
            duration: Cell::new(f64::NAN),
            handlers: RefCell::new(Vec::new()),
        }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    pub fn play_calls(&self) -> usize {
        self.play_calls.get()
    }

    pub fn pause_calls(&self) -> usize {
        self.pause_calls.get()
    }

    pub fn set_position(&self, current_time: f64, duration: f64) {
        self.current_time.set(current_time);
        self.duration.set(duration);
    }

    pub fn listener_count(&self, event: MediaEvent) -> usize {
        self.handlers
            .borrow()
            .iter()
            .filter(|(e, _)| *e == event)
            .count()
    }

    /**
        Fire `event` at every handler registered for it.
    */
    pub fn emit(&self, event: MediaEvent) {
        let handlers: Vec<MediaHandler> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(e, _)| *e == event)
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            handler(event);
        }
    }
}

impl MediaElement for VirtualMedia {
    fn play(&self) {
        self.play_calls.set(self.play_calls.get() + 1);
        self.playing.set(true);
    }

    fn pause(&self) {
        self.pause_calls.set(self.pause_calls.get() + 1);
        self.playing.set(false);
    }

    fn focus(&self) {
        self.focused.set(true);
    }

    fn current_time(&self) -> f64 {
        self.current_time.get()
    }

    fn duration(&self) -> f64 {
        self.duration.get()
    }

    fn on(&self, event: MediaEvent, handler: MediaHandler) {
        self.handlers.borrow_mut().push((event, handler));
    }
}

/**
    In-memory container.

    Keeps the rendered children and container classes, the mounted media
    element, click handlers and every dispatched tracking event.
*/
#[derive(Default)]
pub struct VirtualHost {
    classes: RefCell<Vec<String>>,
    children: RefCell<Vec<Node>>,
    media: RefCell<Option<Rc<VirtualMedia>>>,
    clicks: RefCell<Vec<(Role, Rc<dyn Fn()>)>>,
    events: RefCell<Vec<TrackingEvent>>,
}

impl VirtualHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    pub fn children(&self) -> Vec<Node> {
        self.children.borrow().clone()
    }

    pub fn roles(&self) -> Vec<Option<Role>> {
        self.children.borrow().iter().map(|n| n.role).collect()
    }

    pub fn child(&self, role: Role) -> Option<Node> {
        self.children
            .borrow()
            .iter()
            .find(|n| n.role == Some(role))
            .cloned()
    }

    pub fn media(&self) -> Option<Rc<VirtualMedia>> {
        self.media.borrow().clone()
    }

    pub fn tracking_events(&self) -> Vec<TrackingEvent> {
        self.events.borrow().clone()
    }

    /**
        Simulate a click on the child rendered with `role`. Returns false when
        no such child is present or nothing listens for clicks on it.
    */
    pub fn click(&self, role: Role) -> bool {
        if self.child(role).is_none() {
            return false;
        }
        let handlers: Vec<Rc<dyn Fn()>> = self
            .clicks
            .borrow()
            .iter()
            .filter(|(r, _)| *r == role)
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in &handlers {
            handler();
        }
        !handlers.is_empty()
    }

    /// Container markup.
    pub fn to_html(&self) -> String {
        let container = Node::new("div")
            .classes(self.classes())
            .attr("data-n-video-source", "brightcove");
        let container = self
            .children()
            .into_iter()
            .fold(container, |node, child| node.child(child));
        container.to_html()
    }
}

impl Host for VirtualHost {
    type Media = VirtualMedia;

    fn add_class(&self, class: &str) {
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().retain(|c| c != class);
    }

    fn append(&self, node: &Node) {
        self.children.borrow_mut().push(node.clone());
    }

    fn remove(&self, role: Role) {
        let mut children = self.children.borrow_mut();
        if let Some(index) = children.iter().position(|n| n.role == Some(role)) {
            children.remove(index);
        }
        drop(children);
        self.clicks.borrow_mut().retain(|(r, _)| *r != role);
    }

    fn mount_media(&self, node: &Node) -> Result<Rc<VirtualMedia>> {
        let media = Rc::new(VirtualMedia::new(node.clone()));
        self.children.borrow_mut().push(node.clone());
        *self.media.borrow_mut() = Some(Rc::clone(&media));
        Ok(media)
    }

    fn on_click(&self, role: Role, handler: Box<dyn Fn()>) {
        self.clicks.borrow_mut().push((role, Rc::from(handler)));
    }

    fn dispatch(&self, event: &TrackingEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
