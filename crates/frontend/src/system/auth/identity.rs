//! Bridge to the external identity provider.
//!
//! The provider's browser SDK is loaded by `index.html` and exposed as
//! `window.Clerk`. Only the handful of calls the shell needs are wrapped:
//! `load`, `user`, `addListener`, `openSignIn`, `openSignUp`, `signOut`.

use contracts::system::auth::UserProfile;
use js_sys::{Function, Promise, Reflect};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

const PROVIDER_GLOBAL: &str = "Clerk";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("identity provider `window.{0}` is not available")]
    Missing(&'static str),

    #[error("identity provider call `{0}` failed: {1}")]
    Call(&'static str, String),
}

fn provider() -> Result<JsValue, IdentityError> {
    let window = web_sys::window().ok_or(IdentityError::Missing(PROVIDER_GLOBAL))?;
    let clerk = Reflect::get(&window, &JsValue::from_str(PROVIDER_GLOBAL))
        .map_err(|_| IdentityError::Missing(PROVIDER_GLOBAL))?;
    if clerk.is_undefined() || clerk.is_null() {
        return Err(IdentityError::Missing(PROVIDER_GLOBAL));
    }
    Ok(clerk)
}

fn method(target: &JsValue, name: &'static str) -> Result<Function, IdentityError> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(|e| IdentityError::Call(name, format!("{e:?}")))?
        .dyn_into::<Function>()
        .map_err(|_| IdentityError::Call(name, "not a function".to_string()))
}

/// Call a provider method and wait for its promise, if it returns one
async fn call(name: &'static str) -> Result<(), IdentityError> {
    let clerk = provider()?;
    let result = method(&clerk, name)?
        .call0(&clerk)
        .map_err(|e| IdentityError::Call(name, format!("{e:?}")))?;

    if let Ok(promise) = result.dyn_into::<Promise>() {
        JsFuture::from(promise)
            .await
            .map_err(|e| IdentityError::Call(name, format!("{e:?}")))?;
    }
    Ok(())
}

fn string_prop(target: &JsValue, name: &str) -> Option<String> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
}

/// Initialise the SDK; resolves once the session is known
pub async fn load() -> Result<(), IdentityError> {
    call("load").await
}

/// The signed-in user, if any
pub fn current_user() -> Option<UserProfile> {
    let clerk = provider().ok()?;
    let user = Reflect::get(&clerk, &JsValue::from_str("user")).ok()?;
    if user.is_undefined() || user.is_null() {
        return None;
    }
    Some(UserProfile::from_provider(
        string_prop(&user, "fullName"),
        string_prop(&user, "username"),
        string_prop(&user, "imageUrl"),
    ))
}

/// Run `callback` whenever the provider reports a session change
pub fn on_change(callback: impl Fn() + 'static) -> Result<(), IdentityError> {
    let clerk = provider()?;
    let add_listener = method(&clerk, "addListener")?;

    let handler = Closure::wrap(Box::new(move |_resources: JsValue| {
        callback();
    }) as Box<dyn FnMut(JsValue)>);

    add_listener
        .call1(&clerk, handler.as_ref().unchecked_ref())
        .map_err(|e| IdentityError::Call("addListener", format!("{e:?}")))?;
    // The listener lives as long as the page
    handler.forget();
    Ok(())
}

pub async fn open_sign_in() -> Result<(), IdentityError> {
    call("openSignIn").await
}

pub async fn open_sign_up() -> Result<(), IdentityError> {
    call("openSignUp").await
}

pub async fn sign_out() -> Result<(), IdentityError> {
    call("signOut").await
}
