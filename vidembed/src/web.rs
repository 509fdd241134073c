/*!
    Browser binding: renders components into real DOM containers.

    Containers are marked up as

    ```html
    <div data-n-video-source="brightcove" data-n-video-id="4084879507001"
         data-n-video-placeholder data-n-video-play-button></div>
    ```

    and `initVideos()` initializes every such container on the page.
*/

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, Document, Element, HtmlVideoElement};

use crate::brightcove::Brightcove;
use crate::dom::{Host, MediaElement, MediaEvent, MediaHandler, Node, Role};
use crate::error::{Error, Result};
use crate::tracking::{TRACKING_EVENT, TrackingEvent};
use crate::video::VideoOptions;

const CONTAINER_SELECTOR: &str = "[data-n-video-source=\"brightcove\"]";

thread_local! {
    // Components live for the page session
    static MOUNTED: RefCell<Vec<Brightcove<DomHost>>> = const { RefCell::new(Vec::new()) };
}

fn dom_error(e: JsValue) -> Error {
    Error::Dom(format!("{:?}", e))
}

/**
    Video element on the page.
*/
pub struct DomMedia {
    element: HtmlVideoElement,
}

impl MediaElement for DomMedia {
    fn play(&self) {
        // The returned promise rejects when autoplay is blocked; the element
        // then simply stays paused.
        if let Err(e) = self.element.play() {
            log::warn!("[web] play() failed: {:?}", e);
        }
    }

    fn pause(&self) {
        if let Err(e) = self.element.pause() {
            log::warn!("[web] pause() failed: {:?}", e);
        }
    }

    fn focus(&self) {
        let _ = self.element.focus();
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn duration(&self) -> f64 {
        self.element.duration()
    }

    fn on(&self, event: MediaEvent, handler: MediaHandler) {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            handler(event)
        });
        if let Err(e) = self
            .element
            .add_event_listener_with_callback(event.as_str(), callback.as_ref().unchecked_ref())
        {
            log::warn!("[web] Could not listen for {}: {:?}", event.as_str(), e);
        }
        // Listener lives as long as the element
        callback.forget();
    }
}

/**
    Container element on the page.
*/
pub struct DomHost {
    container: Element,
    document: Document,
    rendered: RefCell<Vec<(Role, Element)>>,
}

impl DomHost {
    pub fn new(container: Element) -> Result<Self> {
        let document = container
            .owner_document()
            .ok_or_else(|| Error::Dom("container has no owner document".to_string()))?;
        Ok(Self {
            container,
            document,
            rendered: RefCell::new(Vec::new()),
        })
    }

    fn build(&self, node: &Node) -> Result<Element> {
        let element = self.document.create_element(&node.tag).map_err(dom_error)?;
        if !node.classes.is_empty() {
            element.set_class_name(&node.class_name());
        }
        for (name, value) in &node.attributes {
            element.set_attribute(name, value).map_err(dom_error)?;
        }
        if let Some(text) = &node.text {
            element.set_text_content(Some(text));
        }
        for child in &node.children {
            element
                .append_child(&self.build(child)?)
                .map_err(dom_error)?;
        }
        Ok(element)
    }

    fn insert(&self, node: &Node) -> Result<Element> {
        let element = self.build(node)?;
        self.container.append_child(&element).map_err(dom_error)?;
        if let Some(role) = node.role {
            self.rendered.borrow_mut().push((role, element.clone()));
        }
        Ok(element)
    }

    fn find(&self, role: Role) -> Option<Element> {
        self.rendered
            .borrow()
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, el)| el.clone())
    }
}

impl Host for DomHost {
    type Media = DomMedia;

    fn add_class(&self, class: &str) {
        let _ = self.container.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.container.class_list().remove_1(class);
    }

    fn append(&self, node: &Node) {
        if let Err(e) = self.insert(node) {
            log::warn!("[web] Could not render <{}>: {}", node.tag, e);
        }
    }

    fn remove(&self, role: Role) {
        let mut rendered = self.rendered.borrow_mut();
        if let Some(index) = rendered.iter().position(|(r, _)| *r == role) {
            let (_, element) = rendered.remove(index);
            element.remove();
        }
    }

    fn mount_media(&self, node: &Node) -> Result<Rc<DomMedia>> {
        let element = self
            .insert(node)?
            .dyn_into::<HtmlVideoElement>()
            .map_err(|_| Error::Dom(format!("<{}> is not a video element", node.tag)))?;
        Ok(Rc::new(DomMedia { element }))
    }

    fn on_click(&self, role: Role, handler: Box<dyn Fn()>) {
        let Some(element) = self.find(role) else {
            log::warn!("[web] No {} element to listen on", role.as_str());
            return;
        };
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| handler());
        if let Err(e) =
            element.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            log::warn!("[web] Could not listen for clicks: {:?}", e);
        }
        callback.forget();
    }

    fn dispatch(&self, event: &TrackingEvent) {
        if let Err(e) = self.dispatch_tracking(event) {
            log::warn!("[web] Could not dispatch {}: {}", TRACKING_EVENT, e);
        }
    }
}

impl DomHost {
    fn dispatch_tracking(&self, event: &TrackingEvent) -> Result<()> {
        let json = serde_json::to_string(event).map_err(|e| Error::Dom(e.to_string()))?;
        let detail = js_sys::JSON::parse(&json).map_err(dom_error)?;

        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_detail(&detail);
        let custom = CustomEvent::new_with_event_init_dict(TRACKING_EVENT, &init).map_err(dom_error)?;

        let body = self
            .document
            .body()
            .ok_or_else(|| Error::Dom("document has no body".to_string()))?;
        body.dispatch_event(&custom).map_err(dom_error)?;
        Ok(())
    }
}

fn attributes(element: &Element) -> Vec<(String, String)> {
    let attributes = element.attributes();
    (0..attributes.length())
        .filter_map(|i| attributes.item(i))
        .map(|attr| (attr.name(), attr.value()))
        .collect()
}

/**
    Initialize a component for one container, reading its options from
    `data-n-video-*` attributes.
*/
pub async fn mount(container: Element) -> Result<Brightcove<DomHost>> {
    let opts = VideoOptions::from_attributes(attributes(&container));
    let id = opts
        .id
        .clone()
        .ok_or_else(|| Error::Dom("container has no data-n-video-id".to_string()))?;

    let video = Brightcove::new(id, opts, Rc::new(DomHost::new(container)?));
    video.init().await?;
    Ok(video)
}

/**
    Initialize every Brightcove container on the page.
*/
#[wasm_bindgen(js_name = initVideos)]
pub fn init_videos() -> std::result::Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let containers = document.query_selector_all(CONTAINER_SELECTOR)?;

    for i in 0..containers.length() {
        let Some(container) = containers.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match mount(container).await {
                Ok(video) => MOUNTED.with(|mounted| mounted.borrow_mut().push(video)),
                Err(e) => web_sys::console::error_1(&format!("[vidembed] {}", e).into()),
            }
        });
    }

    Ok(())
}
