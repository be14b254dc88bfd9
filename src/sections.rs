// Sliding content sections. Each named section maps to a container and a
// pair of animate.css animations. While a section is animating further
// requests for it are dropped.

use crate::error::PageError;
use crate::utils;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, HtmlElement};

const ANIMATED: &str = "animated";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Left,
    Right,
    Bottom,
    Top,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SectionConfig {
    pub container: &'static str,
    pub show_animation: &'static str,
    pub hide_animation: &'static str,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Left, Section::Right, Section::Bottom, Section::Top];

    pub fn from_name(name: &str) -> Option<Section> {
        match name {
            "left" => Some(Section::Left),
            "right" => Some(Section::Right),
            "bottom" => Some(Section::Bottom),
            "top" => Some(Section::Top),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Left => "left",
            Section::Right => "right",
            Section::Bottom => "bottom",
            Section::Top => "top",
        }
    }

    pub fn config(self) -> SectionConfig {
        match self {
            Section::Left => SectionConfig {
                container: "#about_container",
                show_animation: "slideInLeft",
                hide_animation: "slideOutLeft",
            },
            Section::Right => SectionConfig {
                container: "#work_container",
                show_animation: "slideInRight",
                hide_animation: "slideOutRight",
            },
            Section::Bottom => SectionConfig {
                container: "#contact_container",
                show_animation: "slideInUp",
                hide_animation: "slideOutDown",
            },
            Section::Top => SectionConfig {
                container: "#top_container",
                show_animation: "slideInDown",
                hide_animation: "slideOutUp",
            },
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Show,
    Hide,
}

impl Transition {
    pub fn animation(self, section: Section) -> &'static str {
        let config = section.config();
        match self {
            Transition::Show => config.show_animation,
            Transition::Hide => config.hide_animation,
        }
    }

    // Display value applied before the animation starts, if any
    fn display_before(self) -> Option<&'static str> {
        match self {
            Transition::Show => Some("inherit"),
            Transition::Hide => None,
        }
    }

    // Display value applied once the animation has ended, if any
    fn display_after(self) -> Option<&'static str> {
        match self {
            Transition::Show => None,
            Transition::Hide => Some("none"),
        }
    }
}

// Sections with an animation in flight
#[derive(Default, Debug)]
pub struct AnimationState {
    active: HashSet<Section>,
}

impl AnimationState {
    pub fn is_animating(&self, section: Section) -> bool {
        self.active.contains(&section)
    }

    // Marks `section` as animating, false if it already was
    pub fn begin(&mut self, section: Section) -> bool {
        self.active.insert(section)
    }

    pub fn finish(&mut self, section: Section) {
        self.active.remove(&section);
    }
}

#[wasm_bindgen]
#[derive(Clone)]
pub struct SectionNavigator {
    document: Document,
    state: Rc<RefCell<AnimationState>>,
}

impl SectionNavigator {
    pub fn for_document(document: Document) -> SectionNavigator {
        SectionNavigator {
            document,
            state: Rc::new(RefCell::new(AnimationState::default())),
        }
    }

    // Starts `transition` on the named section. Ok(false) means it was
    // ignored because the section is mid-animation.
    pub fn transition(&self, name: &str, transition: Transition) -> Result<bool, PageError> {
        let section =
            Section::from_name(name).ok_or_else(|| PageError::UnknownSection(name.to_owned()))?;
        if self.state.borrow().is_animating(section) {
            return Ok(false);
        }

        let config = section.config();
        let container = self
            .document
            .query_selector(config.container)
            .map_err(PageError::host)?
            .ok_or_else(|| PageError::MissingContainer(config.container.to_owned()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::MissingContainer(config.container.to_owned()))?;

        self.state.borrow_mut().begin(section);
        if let Err(err) = self.animate(&container, section, transition) {
            self.state.borrow_mut().finish(section);
            return Err(err);
        }
        Ok(true)
    }

    fn animate(
        &self,
        container: &HtmlElement,
        section: Section,
        transition: Transition,
    ) -> Result<(), PageError> {
        let animation = transition.animation(section);
        if let Some(display) = transition.display_before() {
            container
                .style()
                .set_property("display", display)
                .map_err(PageError::host)?;
        }
        container
            .class_list()
            .add_2(ANIMATED, animation)
            .map_err(PageError::host)?;

        let state = Rc::clone(&self.state);
        let target = container.clone();
        on_animation_end(container, move || {
            utils::log_host_failure(target.class_list().remove_2(ANIMATED, animation));
            if let Some(display) = transition.display_after() {
                utils::log_host_failure(target.style().set_property("display", display));
            }
            state.borrow_mut().finish(section);
        })
    }

    fn handle_click(&self, event: &Event) {
        let target = match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            Some(target) => target,
            None => return,
        };

        if let Some(name) = data_attribute(&target, "section") {
            event.prevent_default();
            self.report(self.transition(&name, Transition::Show));
            return;
        }

        let closer = target.closest("[data-close]").ok().flatten();
        if let Some(name) = closer.and_then(|el| data_attribute(&el, "close")) {
            event.prevent_default();
            self.report(self.transition(&name, Transition::Hide));
        }
    }

    fn report(&self, result: Result<bool, PageError>) {
        if let Err(err) = result {
            utils::log_error(&err);
        }
    }
}

#[wasm_bindgen]
impl SectionNavigator {
    // Navigator over the current document, undefined outside a page
    pub fn new() -> Option<SectionNavigator> {
        let document = web_sys::window()?.document()?;
        Some(SectionNavigator::for_document(document))
    }

    pub fn show(&self, name: &str) {
        self.report(self.transition(name, Transition::Show));
    }

    pub fn close(&self, name: &str) {
        self.report(self.transition(name, Transition::Hide));
    }

    pub fn is_animating(&self, name: &str) -> bool {
        Section::from_name(name)
            .map(|section| self.state.borrow().is_animating(section))
            .unwrap_or(false)
    }

    // Delegated click handling: data-section opens, data-close closes
    pub fn listen_for_clicks(&self) {
        let navigator = self.clone();
        let handler = Closure::wrap(Box::new(move |event: Event| {
            navigator.handle_click(&event);
        }) as Box<dyn FnMut(Event)>);

        if let Err(err) = self
            .document
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        {
            utils::log_error(&PageError::host(err));
            return;
        }
        // Lives as long as the page
        handler.forget();
    }
}

fn data_attribute(element: &Element, key: &str) -> Option<String> {
    element
        .dyn_ref::<HtmlElement>()?
        .dataset()
        .get(key)
        .filter(|value| !value.is_empty())
}

// Runs `done` once, on the element's next animationend
pub fn on_animation_end<F>(element: &HtmlElement, done: F) -> Result<(), PageError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(done);
    let mut options = AddEventListenerOptions::new();
    options.once(true);
    element
        .add_event_listener_with_callback_and_add_event_listener_options(
            "animationend",
            callback.unchecked_ref(),
            &options,
        )
        .map_err(PageError::host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_round_trips_its_name() {
        for section in Section::ALL.iter() {
            assert_eq!(Section::from_name(section.name()), Some(*section));
        }
        assert_eq!(Section::from_name("middle"), None);
        assert_eq!(Section::from_name("Left"), None);
    }

    #[test]
    fn table_matches_the_page() {
        assert_eq!(Section::Left.config().container, "#about_container");
        assert_eq!(Section::Right.config().container, "#work_container");
        assert_eq!(Section::Bottom.config().container, "#contact_container");
        assert_eq!(Section::Top.config().container, "#top_container");
        assert_eq!(Transition::Show.animation(Section::Bottom), "slideInUp");
        assert_eq!(Transition::Hide.animation(Section::Bottom), "slideOutDown");
        assert_eq!(Transition::Hide.animation(Section::Top), "slideOutUp");
    }

    #[test]
    fn show_reveals_first_hide_conceals_last() {
        assert_eq!(Transition::Show.display_before(), Some("inherit"));
        assert_eq!(Transition::Show.display_after(), None);
        assert_eq!(Transition::Hide.display_before(), None);
        assert_eq!(Transition::Hide.display_after(), Some("none"));
    }

    #[test]
    fn a_section_animates_once_at_a_time() {
        let mut state = AnimationState::default();
        assert!(state.begin(Section::Left));
        assert!(!state.begin(Section::Left));
        assert!(state.is_animating(Section::Left));

        // Other sections are independent
        assert!(state.begin(Section::Top));

        state.finish(Section::Left);
        assert!(!state.is_animating(Section::Left));
        assert!(state.begin(Section::Left));
    }
}
