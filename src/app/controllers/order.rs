use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::domain::catalog::{CategoryId, MenuItem, Price};
use crate::app::domain::order::{Cart, CartLine, OrderNumber, PaymentMethod, ScreenPhase};
use crate::app::infrastructure::error::{KioskError, Result};

/// What a successful transition did. The shell turns these into narration.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    OrderStarted,
    CategorySelected(CategoryId),
    ItemAdded(CartLine),
    ItemRemoved { index: usize, line: CartLine },
    PaymentOpened,
    PaymentCancelled,
    PaymentConfirmed { method: PaymentMethod, order_number: OrderNumber },
    ReturnedToMenu,
}

/// Owns the cart, the active category and the screen phase.
///
/// Start → Browsing → Payment → Confirmation → Browsing. Every operation
/// checks the phase first; a rejected call leaves all state untouched.
pub struct OrderController {
    phase: ScreenPhase,
    cart: Cart,
    active_category: CategoryId,
    default_category: CategoryId,
    order_number: Option<OrderNumber>,
    rng: StdRng,
}

impl OrderController {
    pub fn new(default_category: CategoryId) -> Self {
        Self::with_rng(default_category, StdRng::from_entropy())
    }

    /// Deterministic order numbers, for tests and demos.
    pub fn with_seed(default_category: CategoryId, seed: u64) -> Self {
        Self::with_rng(default_category, StdRng::seed_from_u64(seed))
    }

    fn with_rng(default_category: CategoryId, rng: StdRng) -> Self {
        Self {
            phase: ScreenPhase::Start,
            cart: Cart::new(),
            active_category: default_category.clone(),
            default_category,
            order_number: None,
            rng,
        }
    }

    fn require(&self, phase: ScreenPhase, action: &'static str) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(KioskError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    pub fn begin(&mut self) -> Result<OrderEvent> {
        self.require(ScreenPhase::Start, "start an order")?;
        self.phase = ScreenPhase::Browsing;
        Ok(OrderEvent::OrderStarted)
    }

    pub fn select_category(&mut self, id: CategoryId) -> Result<OrderEvent> {
        self.require(ScreenPhase::Browsing, "change category")?;
        self.active_category = id.clone();
        Ok(OrderEvent::CategorySelected(id))
    }

    pub fn add_item(&mut self, item: &MenuItem) -> Result<OrderEvent> {
        self.require(ScreenPhase::Browsing, "add an item")?;
        let line = CartLine::from(item);
        self.cart.push(line.clone());
        Ok(OrderEvent::ItemAdded(line))
    }

    pub fn remove_item(&mut self, index: usize) -> Result<OrderEvent> {
        self.require(ScreenPhase::Browsing, "remove an item")?;
        let line = self.cart.remove(index)?;
        Ok(OrderEvent::ItemRemoved { index, line })
    }

    pub fn proceed_to_payment(&mut self) -> Result<OrderEvent> {
        self.require(ScreenPhase::Browsing, "finalize the order")?;
        if self.cart.is_empty() {
            return Err(KioskError::EmptyCart);
        }
        self.phase = ScreenPhase::Payment;
        Ok(OrderEvent::PaymentOpened)
    }

    pub fn cancel_payment(&mut self) -> Result<OrderEvent> {
        self.require(ScreenPhase::Payment, "cancel payment")?;
        self.phase = ScreenPhase::Browsing;
        Ok(OrderEvent::PaymentCancelled)
    }

    /// The cart stays visible on the confirmation screen until the customer
    /// returns to the menu.
    pub fn confirm_payment(&mut self, method: PaymentMethod) -> Result<OrderEvent> {
        self.require(ScreenPhase::Payment, "confirm payment")?;
        let order_number = OrderNumber::generate(&mut self.rng);
        self.order_number = Some(order_number);
        self.phase = ScreenPhase::Confirmation;
        Ok(OrderEvent::PaymentConfirmed { method, order_number })
    }

    pub fn return_to_menu(&mut self) -> Result<OrderEvent> {
        self.require(ScreenPhase::Confirmation, "return to the menu")?;
        self.cart.clear();
        self.order_number = None;
        self.active_category = self.default_category.clone();
        self.phase = ScreenPhase::Browsing;
        Ok(OrderEvent::ReturnedToMenu)
    }

    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn total(&self) -> Price {
        self.cart.total()
    }

    pub fn active_category(&self) -> &CategoryId {
        &self.active_category
    }

    pub fn order_number(&self) -> Option<OrderNumber> {
        self.order_number
    }
}
