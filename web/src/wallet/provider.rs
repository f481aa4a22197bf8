//! EIP-1193 provider seam.
//!
//! [`InjectedProvider`] wraps the `window.ethereum` object browser wallets
//! inject. Tests and non-browser callers plug in their own
//! [`WalletProvider`].

use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::error::WalletError;

/// Something that answers EIP-1193 `request({ method, params })` calls.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError>;
}

/// The wallet object injected into `window.ethereum`.
#[derive(Debug, Clone)]
pub struct InjectedProvider {
    ethereum: JsValue,
}

impl InjectedProvider {
    /// Look up `window.ethereum`. `None` when no wallet extension injected
    /// one, and always outside the browser.
    pub fn detect() -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window()?;
            let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
            if ethereum.is_undefined() || ethereum.is_null() {
                return None;
            }
            Some(Self { ethereum })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    /// Whether the injected object identifies itself as MetaMask.
    pub fn is_metamask(&self) -> bool {
        js_sys::Reflect::get(&self.ethereum, &JsValue::from_str("isMetaMask"))
            .map(|flag| flag.is_truthy())
            .unwrap_or(false)
    }
}

impl WalletProvider for InjectedProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        let payload = serde_json::json!({ "method": method, "params": params });
        let payload = js_sys::JSON::parse(&payload.to_string())
            .map_err(|e| WalletError::Serialization(describe(&e)))?;

        let request = js_sys::Reflect::get(&self.ethereum, &JsValue::from_str("request"))
            .map_err(|e| WalletError::RequestFailed(describe(&e)))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| WalletError::RequestFailed("provider has no request method".into()))?;

        let pending = request
            .call1(&self.ethereum, &payload)
            .map_err(|e| WalletError::RequestFailed(describe(&e)))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| WalletError::RequestFailed("request did not return a promise".into()))?;

        let result = JsFuture::from(pending)
            .await
            .map_err(|e| WalletError::RequestFailed(describe(&e)))?;
        if result.is_undefined() {
            return Ok(Value::Null);
        }

        let text: String = js_sys::JSON::stringify(&result)
            .map_err(|e| WalletError::Serialization(describe(&e)))?
            .into();
        serde_json::from_str(&text).map_err(|e| WalletError::Serialization(e.to_string()))
    }
}

// Wallets reject with `{ code, message }`; fall back to the raw value.
fn describe(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_injected_provider_outside_browser() {
        assert!(InjectedProvider::detect().is_none());
    }
}
