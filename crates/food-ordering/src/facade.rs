//! The ordering facade.

use food_auth::{Identity, LoginForm, Session, SessionId, SessionState};
use food_commerce::cart::{Cart, CartSnapshot};
use food_commerce::catalog::{Catalog, MenuItem};
use food_commerce::checkout::{self, CheckoutOutcome};
use food_commerce::{CommerceError, MenuItemId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::OrderingConfig;
use crate::navigation::{LoginOutcome, NavBar, View};
use crate::OrderingError;

/// What happens to the cart when the user logs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CartPolicy {
    /// Keep the cart for the next user of this session.
    #[default]
    Retain,
    /// Empty the cart.
    Clear,
}

/// Single entry point for the presentation and routing layers.
///
/// Owns one session, one cart and the menu. Instances share nothing, so
/// several can run side by side.
///
/// The cart belongs to the running session, not to the identity: logging in
/// does not touch it.
#[derive(Debug, Clone)]
pub struct OrderingFacade {
    session: Session,
    catalog: Catalog,
    cart: Cart,
    store_name: String,
    guest_label: String,
    logout_policy: CartPolicy,
}

impl OrderingFacade {
    /// Create a facade over a catalog with default labels.
    pub fn new(catalog: Catalog) -> Self {
        let defaults = OrderingConfig::default();
        Self::assemble(
            catalog,
            defaults.store_name,
            defaults.guest_label,
            defaults.logout_cart_policy,
        )
    }

    /// Create a facade over the built-in sample menu.
    pub fn with_sample_menu() -> Self {
        Self::new(Catalog::sample())
    }

    /// Create a facade from configuration.
    pub fn from_config(config: &OrderingConfig) -> Result<Self, OrderingError> {
        let catalog = config.catalog()?;
        Ok(Self::assemble(
            catalog,
            config.store_name.clone(),
            config.guest_label.clone(),
            config.logout_cart_policy,
        ))
    }

    fn assemble(
        catalog: Catalog,
        store_name: String,
        guest_label: String,
        logout_policy: CartPolicy,
    ) -> Self {
        let session = Session::anonymous();
        let cart = Cart::new(catalog.currency());
        debug!(session = %session.id(), items = catalog.len(), "ordering session started");
        Self {
            session,
            catalog,
            cart,
            store_name,
            guest_label,
            logout_policy,
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Log in with an email. Any non-empty email is accepted.
    ///
    /// The cart is left as it was.
    #[instrument(skip(self), fields(session = %self.session.id()))]
    pub fn do_login(&mut self, email: &str) -> Result<LoginOutcome, OrderingError> {
        let identity = self.session.login(Some(email)).inspect_err(|e| {
            debug!(error = %e, "login rejected");
        })?;
        Ok(self.logged_in(identity))
    }

    /// Log in from a submitted form. The password is ignored.
    #[instrument(skip_all, fields(session = %self.session.id()))]
    pub fn login_with_form(&mut self, form: &LoginForm) -> Result<LoginOutcome, OrderingError> {
        let identity = self.session.login_form(form).inspect_err(|e| {
            debug!(error = %e, "login rejected");
        })?;
        Ok(self.logged_in(identity))
    }

    fn logged_in(&self, identity: Identity) -> LoginOutcome {
        info!(
            email = identity.email(),
            cart_items = self.cart.item_count(),
            "logged in"
        );
        LoginOutcome {
            identity,
            next_view: View::Menu,
        }
    }

    /// Return to anonymous, applying `policy` to the cart.
    #[instrument(skip(self), fields(session = %self.session.id()))]
    pub fn logout(&mut self, policy: CartPolicy) -> CartSnapshot {
        let previous = self.session.logout();
        if policy == CartPolicy::Clear {
            self.cart.clear();
        }
        info!(
            was_authenticated = previous.is_some(),
            cart_items = self.cart.item_count(),
            "logged out"
        );
        self.cart.snapshot()
    }

    /// Log out using the configured cart policy.
    pub fn logout_with_default_policy(&mut self) -> CartSnapshot {
        self.logout(self.logout_policy)
    }

    /// Current session state.
    pub fn current_session(&self) -> &SessionState {
        self.session.current()
    }

    pub fn session_id(&self) -> &SessionId {
        self.session.id()
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// The menu in display order.
    pub fn browse_menu(&self) -> &[MenuItem] {
        self.catalog.list()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of a menu item.
    ///
    /// The item must be on this facade's menu; the menu's own copy is what
    /// goes into the cart.
    #[instrument(skip_all, fields(session = %self.session.id(), item = %item.id))]
    pub fn add_to_cart(&mut self, item: &MenuItem) -> Result<CartSnapshot, OrderingError> {
        self.add_to_cart_by_id(item.id)
    }

    /// Add one unit of the menu item with this id.
    #[instrument(skip(self), fields(session = %self.session.id()))]
    pub fn add_to_cart_by_id(&mut self, item_id: MenuItemId) -> Result<CartSnapshot, OrderingError> {
        let Some(item) = self.catalog.get(item_id) else {
            warn!("item not on the menu");
            return Err(CommerceError::ItemNotFound(item_id).into());
        };
        let quantity = self.cart.add(item)?;
        debug!(%quantity, "added to cart");
        Ok(self.cart.snapshot())
    }

    /// Set an entry's quantity, clamped to a minimum of 1.
    ///
    /// Unknown items are ignored and the unchanged cart is returned.
    #[instrument(skip(self), fields(session = %self.session.id()))]
    pub fn change_quantity(&mut self, item_id: MenuItemId, requested: i64) -> CartSnapshot {
        if self.cart.set_quantity(item_id, requested) {
            debug!("quantity changed");
        } else {
            warn!("quantity change for item not in cart ignored");
        }
        self.cart.snapshot()
    }

    /// One more unit of an item already in the cart.
    pub fn increment(&mut self, item_id: MenuItemId) -> CartSnapshot {
        let requested = self.current_quantity(item_id).saturating_add(1);
        self.change_quantity(item_id, requested)
    }

    /// One fewer unit of an item already in the cart, never below 1.
    pub fn decrement(&mut self, item_id: MenuItemId) -> CartSnapshot {
        let requested = self.current_quantity(item_id).saturating_sub(1);
        self.change_quantity(item_id, requested)
    }

    fn current_quantity(&self, item_id: MenuItemId) -> i64 {
        self.cart
            .get(item_id)
            .map_or(0, |entry| i64::from(entry.quantity.get()))
    }

    /// Remove an item from the cart. Unknown items are ignored.
    #[instrument(skip(self), fields(session = %self.session.id()))]
    pub fn remove_from_cart(&mut self, item_id: MenuItemId) -> CartSnapshot {
        if self.cart.remove(item_id) {
            debug!("removed from cart");
        } else {
            debug!("remove for item not in cart ignored");
        }
        self.cart.snapshot()
    }

    /// Empty the cart.
    #[instrument(skip(self), fields(session = %self.session.id()))]
    pub fn clear_cart(&mut self) -> CartSnapshot {
        self.cart.clear();
        debug!("cart cleared");
        self.cart.snapshot()
    }

    /// Current cart state.
    pub fn cart_snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Request checkout. Always reports "not implemented"; the cart is
    /// untouched.
    #[instrument(skip(self), fields(session = %self.session.id()))]
    pub fn checkout(&self) -> CheckoutOutcome {
        let outcome = checkout::checkout(&self.cart);
        info!(
            item_count = self.cart.item_count(),
            "checkout requested: {}",
            outcome.message()
        );
        outcome
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// What the navigation bar should show.
    pub fn nav_bar(&self) -> NavBar {
        NavBar::new(
            &self.store_name,
            &self.guest_label,
            self.session.current(),
            self.cart.item_count(),
        )
    }
}

impl Default for OrderingFacade {
    fn default() -> Self {
        Self::with_sample_menu()
    }
}
