use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::future::TimeoutFuture;
use serde_json::json;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    CanvasRenderingContext2d, DeviceMotionEvent, Element, Event, HtmlCanvasElement, HtmlElement,
    HtmlImageElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions,
    WheelEvent,
};
use yew::prelude::*;

use crate::anchors::{
    fragment_target, scroll_top_for, FRAGMENT_ANCHOR_SELECTOR, REVEAL_CLASS, REVEAL_CONTENT_SELECTOR,
    REVEAL_SECTION_SELECTOR, REVEAL_THRESHOLD,
};
use crate::carousel::{progress_percent, progress_style, step_target, Direction};
use crate::config::SiteConfig;
use crate::content::{
    ContactLink, MotivationCard, NavLink, Project, SiteContent, Skill, Slide, ABOUT_SECTION, CONTACT_SECTION,
    HOME_SECTION, MOTIVATION_SECTION, PLATFORMS_SECTION, PROJECTS_SECTION, SKILLS_SECTION,
};
use crate::dom::{self, AnimationLoop, Debounced, JsRandom, Observer};
use crate::error::{initialize, isolate, WireError};
use crate::feedback::{
    feedback_link, is_backdrop_click, FeedbackError, PopupEvent, PopupState, EMPTY_FEEDBACK_PROMPT,
};
use crate::grid::Grid;
use crate::logging::{log_event, LogLevel};
use crate::menu::{event_for_key, MenuEvent, MenuState};
use crate::shake::{MotionSample, ShakeDetector};
use crate::slider::{horizontal_delta, LazyImages, LAZY_ROOT_MARGIN, LAZY_THRESHOLD, LOADED_CLASS};

const DOT_COLOR: (u8, u8, u8) = (56, 189, 248);
const LINE_STYLE: &str = "rgba(56, 189, 248, 0.1)";
const LINE_WIDTH: f64 = 0.5;
const PRELOADER_HIDE_CLASS: &str = "preloader-hide";

impl Reducible for MenuState {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

impl Reducible for PopupState {
    type Action = PopupEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[hook]
fn use_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

fn smooth_scroll_options(left: Option<f64>, top: Option<f64>) -> ScrollToOptions {
    let options = ScrollToOptions::new();
    if let Some(left) = left {
        options.set_left(left);
    }
    if let Some(top) = top {
        options.set_top(top);
    }
    options.set_behavior(ScrollBehavior::Smooth);
    options
}

fn schedule_hide(delay_ms: u32, hide: Callback<()>) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        hide.emit(());
    });
}

fn start_preloader(delay_ms: u32, hide: Callback<()>) -> Result<Option<EventListener>, WireError> {
    let window = dom::window()?;

    // The wasm bundle may finish booting after `load` has already fired.
    if dom::document()?.ready_state() == "complete" {
        schedule_hide(delay_ms, hide);
        return Ok(None);
    }

    let listener = EventListener::once(&window, "load", move |_| schedule_hide(delay_ms, hide));
    Ok(Some(listener))
}

#[function_component(Preloader)]
fn preloader() -> Html {
    let config = use_config();
    let hidden = use_state(|| false);

    {
        let hidden = hidden.clone();
        use_effect_with((), move |_| {
            let hide = Callback::from(move |_: ()| hidden.set(true));
            let runtime = initialize(&config, "preloader", || start_preloader(config.preloader_delay_ms, hide));
            move || drop(runtime)
        });
    }

    html! {
        <div id="preloader" class={classes!("preloader", (*hidden).then_some(PRELOADER_HIDE_CLASS))} aria-hidden="true">
            <div class="preloader-ring"></div>
        </div>
    }
}

struct CanvasRuntime {
    animation: Rc<RefCell<Option<AnimationLoop>>>,
    _resize: EventListener,
    _debounce: Rc<Debounced>,
}

impl Drop for CanvasRuntime {
    fn drop(&mut self) {
        if let Some(animation) = self.animation.borrow_mut().take() {
            animation.stop();
        }
    }
}

fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    grid: &mut Grid,
    random: &mut JsRandom,
) -> Result<(), WireError> {
    let segments = grid.advance(random);
    let (red, green, blue) = DOT_COLOR;

    ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));

    for dot in grid.dots() {
        ctx.set_fill_style_str(&format!("rgba({red}, {green}, {blue}, {:.3})", dot.alpha));
        ctx.begin_path();
        ctx.arc(dot.x, dot.y, dot.size, 0.0, TAU)?;
        ctx.fill();
    }

    ctx.set_stroke_style_str(LINE_STYLE);
    ctx.set_line_width(LINE_WIDTH);
    for segment in segments {
        ctx.begin_path();
        ctx.move_to(segment.from.0, segment.from.1);
        ctx.line_to(segment.to.0, segment.to.1);
        ctx.stroke();
    }

    Ok(())
}

fn start_grid_animation(
    config: &Rc<SiteConfig>,
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
) -> Result<AnimationLoop, WireError> {
    let window = dom::window()?;
    let (width, height) = dom::viewport_size(&window);
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);

    let mut grid = Grid::new(width, height);
    let mut random = JsRandom;
    let canvas = canvas.clone();
    let ctx = ctx.clone();
    let config = config.clone();

    Ok(AnimationLoop::start(move || {
        isolate(&config, "tech_canvas", || draw_frame(&ctx, &canvas, &mut grid, &mut random)).is_some()
    }))
}

fn start_tech_canvas(config: &Rc<SiteConfig>, canvas_ref: &NodeRef) -> Result<CanvasRuntime, WireError> {
    let window = dom::window()?;
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(WireError::MissingElement("#techCanvas"))?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or(WireError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| WireError::NoContext)?;

    let animation = Rc::new(RefCell::new(Some(start_grid_animation(config, &canvas, &ctx)?)));

    let debounce = {
        let animation = animation.clone();
        let config = config.clone();
        Rc::new(Debounced::new(config.resize_debounce_ms, move || {
            if let Some(previous) = animation.borrow_mut().take() {
                previous.stop();
            }
            let next = isolate(&config, "tech_canvas", || start_grid_animation(&config, &canvas, &ctx));
            *animation.borrow_mut() = next;
        }))
    };

    let resize = {
        let debounce = debounce.clone();
        EventListener::new(&window, "resize", move |_| debounce.trigger())
    };

    Ok(CanvasRuntime {
        animation,
        _resize: resize,
        _debounce: debounce,
    })
}

#[function_component(TechCanvas)]
fn tech_canvas() -> Html {
    let config = use_config();
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let runtime = initialize(&config, "tech_canvas", || start_tech_canvas(&config, &canvas_ref));
            move || drop(runtime)
        });
    }

    html! {
        <canvas id="techCanvas" class="tech-canvas" ref={canvas_ref} aria-hidden="true"></canvas>
    }
}

fn apply_body_overflow(value: &str) -> Result<(), WireError> {
    let body = dom::document()?.body().ok_or(WireError::MissingElement("body"))?;
    body.style().set_property("overflow", value)?;
    Ok(())
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    owner: AttrValue,
    links: Rc<Vec<NavLink>>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let config = use_config();
    let menu = use_reducer_eq(MenuState::default);
    let view = menu.presentation();

    {
        let config = config.clone();
        use_effect_with(*menu, move |state| {
            isolate(&config, "mobile_menu", || apply_body_overflow(state.presentation().body_overflow));
            || ()
        });
    }

    {
        let dispatcher = menu.dispatcher();
        use_effect_with((), move |_| {
            let runtime = initialize(&config, "mobile_menu", || {
                let document = dom::document()?;
                Ok(EventListener::new(&document, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if let Some(dismiss) = event_for_key(&event.key()) {
                        dispatcher.dispatch(dismiss);
                    }
                }))
            });
            move || drop(runtime)
        });
    }

    let on_toggle = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuEvent::Toggle))
    };

    let on_dismiss = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuEvent::Dismiss))
    };

    html! {
        <header class="navbar">
            <a class="brand" href={format!("#{HOME_SECTION}")}>{props.owner.clone()}</a>
            <button
                class="nav-toggle"
                type="button"
                aria-label="Toggle navigation"
                aria-controls="navLinks"
                aria-expanded={view.aria_expanded}
                onclick={on_toggle}
            >
                <i class={classes!("fa-solid", view.icon)} aria-hidden="true"></i>
            </button>
            <nav id="navLinks" class={classes!("nav-links", view.panel_shown.then_some("show"))}>
                <ul>
                    { for props.links.iter().map(|link| html! {
                        <li>
                            <a href={format!("#{}", link.target)} onclick={on_dismiss.clone()}>{link.label.clone()}</a>
                        </li>
                    }) }
                </ul>
            </nav>
            <div
                id="navOverlay"
                class={classes!("nav-overlay", view.overlay_shown.then_some("show"))}
                onclick={on_dismiss}
            ></div>
        </header>
    }
}

struct SliderRuntime {
    _lazy: Option<Observer>,
    _wheel: EventListener,
}

fn reveal_image(image: &HtmlImageElement, src: &str) {
    let loaded = image.clone();
    let on_load = wasm_bindgen::closure::Closure::once_into_js(move || {
        let _ = loaded.class_list().add_1(LOADED_CLASS);
        let _ = loaded.remove_attribute("data-src");
        loaded.set_onload(None);
    });
    image.set_onload(Some(on_load.unchecked_ref()));
    image.set_src(src);
}

fn start_lazy_images(slider: &HtmlElement, sources: Vec<String>) -> Result<Option<Observer>, WireError> {
    let images = slider.query_selector_all(".slide-img[data-src]")?;
    if images.length() == 0 {
        return Ok(None);
    }

    let pending = Rc::new(RefCell::new(LazyImages::new(sources)));
    let observer = Observer::new(Some(LAZY_ROOT_MARGIN), LAZY_THRESHOLD, move |target, observer| {
        let index = target
            .get_attribute("data-index")
            .and_then(|value| value.parse::<usize>().ok());
        let source = index.and_then(|index| pending.borrow_mut().on_intersect(index));

        if let (Some(src), Some(image)) = (source, target.dyn_ref::<HtmlImageElement>()) {
            reveal_image(image, &src);
        }
        observer.unobserve(&target);
    })?;

    for index in 0..images.length() {
        if let Some(image) = images.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&image);
        }
    }

    Ok(Some(observer))
}

fn start_image_slider(slider_ref: &NodeRef, slides: &[Slide]) -> Result<SliderRuntime, WireError> {
    let slider = slider_ref
        .cast::<HtmlElement>()
        .ok_or(WireError::MissingElement(".slider"))?;

    let lazy = start_lazy_images(&slider, slides.iter().map(|slide| slide.src.clone()).collect())?;

    let target = slider.clone();
    let wheel = EventListener::new_with_options(
        &target,
        "wheel",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            if let Some(delta) = horizontal_delta(event.delta_x(), event.delta_y()) {
                event.prevent_default();
                slider.set_scroll_left(slider.scroll_left() + delta.round() as i32);
            }
        },
    );

    Ok(SliderRuntime {
        _lazy: lazy,
        _wheel: wheel,
    })
}

#[derive(Properties, PartialEq)]
struct ImageSliderProps {
    slides: Rc<Vec<Slide>>,
}

#[function_component(ImageSlider)]
fn image_slider(props: &ImageSliderProps) -> Html {
    let config = use_config();
    let slider_ref = use_node_ref();

    {
        let slider_ref = slider_ref.clone();
        let slides = props.slides.clone();
        use_effect_with((), move |_| {
            let runtime = initialize(&config, "image_slider", || start_image_slider(&slider_ref, &slides));
            move || drop(runtime)
        });
    }

    html! {
        <div class="slider" ref={slider_ref}>
            { for props.slides.iter().enumerate().map(|(index, slide)| html! {
                <figure class="slide">
                    <img
                        class="slide-img"
                        data-src={slide.src.clone()}
                        data-index={index.to_string()}
                        alt={slide.alt.clone()}
                        decoding="async"
                    />
                </figure>
            }) }
        </div>
    }
}

fn update_progress(track_ref: &NodeRef, progress: &UseStateHandle<f64>) -> Result<(), WireError> {
    let track = track_ref
        .cast::<Element>()
        .ok_or(WireError::MissingElement("#motivationSlider"))?;
    progress.set(progress_percent(
        f64::from(track.scroll_left()),
        f64::from(track.scroll_width()),
        f64::from(track.client_width()),
    ));
    Ok(())
}

fn scroll_carousel(track_ref: &NodeRef, gap: f64, direction: Direction) -> Result<(), WireError> {
    let track = track_ref
        .cast::<Element>()
        .ok_or(WireError::MissingElement("#motivationSlider"))?;
    let Some(card) = track
        .query_selector(".motivation-card")?
        .and_then(|card| card.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let left = step_target(
        f64::from(track.scroll_left()),
        f64::from(card.offset_width()),
        gap,
        direction,
    );
    track.scroll_to_with_scroll_to_options(&smooth_scroll_options(Some(left), None));
    Ok(())
}

#[derive(Properties, PartialEq)]
struct MotivationCarouselProps {
    cards: Rc<Vec<MotivationCard>>,
}

#[function_component(MotivationCarousel)]
fn motivation_carousel(props: &MotivationCarouselProps) -> Html {
    let config = use_config();
    let track_ref = use_node_ref();
    let progress = use_state(|| 0.0_f64);

    {
        let config = config.clone();
        let track_ref = track_ref.clone();
        let progress = progress.clone();
        use_effect_with((), move |_| {
            isolate(&config, "motivation_carousel", || update_progress(&track_ref, &progress));

            let keyboard = initialize(&config, "motivation_carousel", || {
                let document = dom::document()?;
                let config = config.clone();
                Ok(EventListener::new(&document, "keydown", move |event| {
                    let Some(direction) = event
                        .dyn_ref::<KeyboardEvent>()
                        .and_then(|event| Direction::from_key(&event.key()))
                    else {
                        return;
                    };
                    isolate(&config, "motivation_carousel", || {
                        scroll_carousel(&track_ref, config.carousel_gap, direction)
                    });
                }))
            });
            move || drop(keyboard)
        });
    }

    let on_scroll = {
        let config = config.clone();
        let track_ref = track_ref.clone();
        let progress = progress.clone();
        Callback::from(move |_: Event| {
            isolate(&config, "motivation_carousel", || update_progress(&track_ref, &progress));
        })
    };

    let on_step = |direction: Direction| {
        let config = config.clone();
        let track_ref = track_ref.clone();
        Callback::from(move |_: MouseEvent| {
            isolate(&config, "motivation_carousel", || {
                scroll_carousel(&track_ref, config.carousel_gap, direction)
            });
        })
    };

    html! {
        <div class="motivation-carousel">
            <div id="motivationSlider" class="motivation-track" ref={track_ref.clone()} onscroll={on_scroll}>
                { for props.cards.iter().map(|card| html! {
                    <article class="motivation-card">
                        <blockquote>{card.quote.clone()}</blockquote>
                        <cite>{card.author.clone()}</cite>
                    </article>
                }) }
            </div>
            <div class="carousel-controls">
                <button class="prev-btn" type="button" aria-label="Previous quote" onclick={on_step(Direction::Previous)}>
                    <i class="fa-solid fa-chevron-left" aria-hidden="true"></i>
                </button>
                <div class="scroll-track">
                    <div class="scroll-progress" style={progress_style(*progress)}></div>
                </div>
                <button class="next-btn" type="button" aria-label="Next quote" onclick={on_step(Direction::Next)}>
                    <i class="fa-solid fa-chevron-right" aria-hidden="true"></i>
                </button>
            </div>
        </div>
    }
}

fn supports_device_motion(window: &web_sys::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("DeviceMotionEvent")).unwrap_or(false)
}

fn start_shake_detection(
    config: &SiteConfig,
    popup: UseReducerDispatcher<PopupState>,
) -> Result<Option<EventListener>, WireError> {
    let window = dom::window()?;
    if !supports_device_motion(&window) {
        return Ok(None);
    }

    let mut detector = ShakeDetector::from_config(config);
    let listener = EventListener::new(&window, "devicemotion", move |event| {
        let Some(acceleration) = event
            .dyn_ref::<DeviceMotionEvent>()
            .and_then(|event| event.acceleration_including_gravity())
        else {
            return;
        };
        let sample = MotionSample {
            x: acceleration.x(),
            y: acceleration.y(),
            z: acceleration.z(),
        };
        if detector.register(sample, js_sys::Date::now()) {
            popup.dispatch(PopupEvent::Show);
        }
    });
    Ok(Some(listener))
}

fn submit_feedback(
    config: &SiteConfig,
    text_ref: &NodeRef,
    popup: &UseReducerDispatcher<PopupState>,
) -> Result<(), WireError> {
    let window = dom::window()?;
    let field = text_ref
        .cast::<HtmlTextAreaElement>()
        .ok_or(WireError::MissingElement("#feedbackText"))?;

    match feedback_link(&config.feedback_recipient, &field.value()) {
        Err(FeedbackError::Empty) => {
            window.alert_with_message(EMPTY_FEEDBACK_PROMPT)?;
        }
        Ok(link) => {
            window.open_with_url_and_target(&link, "_blank")?;
            log_event(config.log_level, LogLevel::Info, "feedback_sent", json!({ "chars": field.value().trim().chars().count() }));
            field.set_value("");
            popup.dispatch(PopupEvent::Hide);
        }
    }
    Ok(())
}

#[function_component(FeedbackPopup)]
fn feedback_popup() -> Html {
    let config = use_config();
    let popup = use_reducer_eq(PopupState::default);
    let popup_ref = use_node_ref();
    let text_ref = use_node_ref();

    {
        let config = config.clone();
        let dispatcher = popup.dispatcher();
        use_effect_with((), move |_| {
            let runtime = initialize(&config, "shake_feedback", || start_shake_detection(&config, dispatcher));
            move || drop(runtime)
        });
    }

    // Yew delegates clicks from the app root, so compare against the popup
    // node rather than `current_target`.
    let on_backdrop = {
        let dispatcher = popup.dispatcher();
        let popup_ref = popup_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let target = event.target().map(JsValue::from);
            let backdrop = popup_ref.get().map(JsValue::from);
            if is_backdrop_click(target.as_ref(), backdrop.as_ref()) {
                dispatcher.dispatch(PopupEvent::Hide);
            }
        })
    };

    let on_send = {
        let dispatcher = popup.dispatcher();
        let text_ref = text_ref.clone();
        Callback::from(move |_: MouseEvent| {
            isolate(&config, "shake_feedback", || submit_feedback(&config, &text_ref, &dispatcher));
        })
    };

    let on_cancel = {
        let dispatcher = popup.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PopupEvent::Hide))
    };

    let display = if popup.is_shown() { "display: flex;" } else { "display: none;" };

    html! {
        <div id="feedbackPopup" class="popup" ref={popup_ref} style={display} role="dialog" aria-modal="true" aria-labelledby="feedbackTitle" onclick={on_backdrop}>
            <div class="popup-content">
                <h3 id="feedbackTitle">{"Found a problem?"}</h3>
                <p>{"Tell me what went wrong and I'll look into it."}</p>
                <textarea id="feedbackText" ref={text_ref} rows="4" placeholder="Describe the issue"></textarea>
                <div class="popup-buttons">
                    <button type="button" onclick={on_send}>{"Send"}</button>
                    <button type="button" onclick={on_cancel}>{"Cancel"}</button>
                </div>
            </div>
        </div>
    }
}

fn start_scroll_reveal() -> Result<Observer, WireError> {
    let document = dom::document()?;
    let sections = document.query_selector_all(REVEAL_SECTION_SELECTOR)?;

    let observer = Observer::new(None, REVEAL_THRESHOLD, |section, _| {
        let _ = section.class_list().add_1(REVEAL_CLASS);
        if let Ok(Some(content)) = section.query_selector(REVEAL_CONTENT_SELECTOR) {
            let _ = content.class_list().add_1(REVEAL_CLASS);
        }
    })?;

    for index in 0..sections.length() {
        if let Some(section) = sections.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&section);
        }
    }
    Ok(observer)
}

#[hook]
fn use_scroll_reveal() {
    let config = use_config();
    use_effect_with((), move |_| {
        let runtime = initialize(&config, "scroll_reveal", start_scroll_reveal);
        move || drop(runtime)
    });
}

fn scroll_to_fragment(config: &SiteConfig, event: &MouseEvent) -> Result<(), WireError> {
    let Some(anchor) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(FRAGMENT_ANCHOR_SELECTOR).ok().flatten())
    else {
        return Ok(());
    };
    event.prevent_default();

    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(id) = fragment_target(&href) else {
        return Ok(());
    };
    let Some(target) = dom::document()?
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let top = scroll_top_for(f64::from(target.offset_top()), config.header_offset);
    dom::window()?.scroll_to_with_scroll_to_options(&smooth_scroll_options(None, Some(top)));
    Ok(())
}

#[hook]
fn use_smooth_anchors() {
    let config = use_config();
    use_effect_with((), move |_| {
        let runtime = initialize(&config, "smooth_scroll", || {
            let document = dom::document()?;
            let config = config.clone();
            Ok(EventListener::new_with_options(
                &document,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        isolate(&config, "smooth_scroll", || scroll_to_fragment(&config, event));
                    }
                },
            ))
        });
        move || drop(runtime)
    });
}

fn skill_item(skill: &Skill) -> Html {
    html! {
        <li class="skill">
            <i class={classes!("fa-solid", skill.icon.clone())} aria-hidden="true"></i>
            <span>{skill.name.clone()}</span>
        </li>
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <article class="project-card">
            <h3>{project.title.clone()}</h3>
            <p>{project.summary.clone()}</p>
            <a class="link" href={project.href.clone()} target="_blank" rel="noopener noreferrer">
                {"View source"}
                <span class="sr-only">{" (opens in a new tab)"}</span>
            </a>
        </article>
    }
}

fn contact_item(link: &ContactLink) -> Html {
    html! {
        <li>
            <a class="contact-link" href={link.href.clone()} target="_blank" rel="noopener noreferrer">
                <i class={classes!("fa-brands", link.icon.clone())} aria-hidden="true"></i>
                {link.label.clone()}
            </a>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
    pub content: Rc<SiteContent>,
}

#[function_component(Page)]
fn page(props: &AppProps) -> Html {
    use_scroll_reveal();
    use_smooth_anchors();

    let content = &props.content;
    let links = use_memo(content.clone(), |content| content.nav.clone());
    let slides = use_memo(content.clone(), |content| content.slides.clone());
    let cards = use_memo(content.clone(), |content| content.motivation.clone());

    html! {
        <>
            <Preloader />
            <TechCanvas />
            <NavBar owner={content.owner.clone()} {links} />
            <main id="content">
                <section id={HOME_SECTION} class="hero">
                    <p class="eyebrow">{"Hello, I'm"}</p>
                    <h1>{content.owner.clone()}</h1>
                    <p class="tagline">{content.tagline.clone()}</p>
                    <a class="btn" href={format!("#{PROJECTS_SECTION}")}>{"See my work"}</a>
                </section>

                <section id={ABOUT_SECTION} aria-labelledby="about-heading">
                    <h2 id="about-heading">{"About"}</h2>
                    <p>{content.about.clone()}</p>
                </section>

                <section id={SKILLS_SECTION} aria-labelledby="skills-heading">
                    <h2 id="skills-heading">{"Skills"}</h2>
                    <ul class="skills">{ for content.skills.iter().map(skill_item) }</ul>
                </section>

                <section id={PROJECTS_SECTION} aria-labelledby="projects-heading">
                    <h2 id="projects-heading">{"Projects"}</h2>
                    <div class="projects">{ for content.projects.iter().map(project_card) }</div>
                </section>

                <section id={PLATFORMS_SECTION} aria-labelledby="platforms-heading">
                    <h2 id="platforms-heading">{"On screen"}</h2>
                    <div class="platform-grid">
                        <ImageSlider {slides} />
                    </div>
                </section>

                <section id={MOTIVATION_SECTION} aria-labelledby="motivation-heading">
                    <h2 id="motivation-heading">{"Motivation"}</h2>
                    <MotivationCarousel {cards} />
                </section>

                <section id={CONTACT_SECTION} aria-labelledby="contact-heading">
                    <h2 id="contact-heading">{"Contact"}</h2>
                    <ul class="contact-list">{ for content.contact.iter().map(contact_item) }</ul>
                    <p class="muted">{"Spotted a bug on your phone? Shake it."}</p>
                </section>
            </main>
            <footer class="site-footer">
                <p>{format!("© {}", content.owner)}</p>
                <a href={format!("#{HOME_SECTION}")}>{"Back to top"}</a>
            </footer>
            <FeedbackPopup />
        </>
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <Page config={props.config.clone()} content={props.content.clone()} />
        </ContextProvider<Rc<SiteConfig>>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log_event(LogLevel::Info, LogLevel::Error, "mount_failed", json!({ "missing": "#app" }));
        return;
    };

    let config = SiteConfig::from_lookup(|key| root.get_attribute(key));
    let content = match SiteContent::embedded() {
        Ok(content) => content,
        Err(error) => {
            log_event(
                config.log_level,
                LogLevel::Error,
                "content_invalid",
                json!({ "error": error.to_string() }),
            );
            return;
        }
    };

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config: Rc::new(config),
            content: Rc::new(content),
        },
    )
    .render();
}
