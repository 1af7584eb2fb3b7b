use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs `callback` once the window has stopped resizing for `delay_ms`.
///
/// Returns `None` outside a browser window. The listener (and any pending
/// timeout) is removed when the returned value is dropped.
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = debounced_resize_listener(move || redraw(), 150);
///     move || drop(listener)
/// });
/// ```
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let cb = callback.clone();
        // Replacing the handle drops (cancels) the previous timeout
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
