//! Narration and label texts in the kiosk's single locale (pt-BR).

use crate::app::controllers::order::OrderEvent;
use crate::app::domain::catalog::{Catalog, MenuItem, Price};
use crate::app::domain::order::PaymentMethod;

pub const ORDER_STARTED: &str = "Pedido iniciado";
pub const EMPTY_CART: &str = "O carrinho está vazio";
pub const PAYMENT_SCREEN: &str = "Tela de pagamento";
pub const PAYMENT_CANCELLED: &str = "Pagamento cancelado";
pub const BACK_TO_MENU: &str = "Voltando ao menu";

pub fn money(price: Price) -> String {
    format!("R$ {}", price)
}

pub fn payment_method(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Cash => "dinheiro",
        PaymentMethod::Card => "cartão",
    }
}

pub fn voice_toggled(enabled: bool) -> &'static str {
    if enabled { "Voz ativada" } else { "Voz desativada" }
}

pub fn color_vision_toggled(enabled: bool) -> &'static str {
    if enabled {
        "Modo dicromacia ativado"
    } else {
        "Modo dicromacia desativado"
    }
}

pub fn sign_language_toggled(enabled: bool) -> &'static str {
    if enabled { "VLibras ativado" } else { "VLibras desativado" }
}

pub fn item_hover(item: &MenuItem) -> String {
    format!("{}, {} reais", item.display_name, item.unit_price)
}

/// Narration for a completed transition. Category labels come from the catalog;
/// an id the catalog does not know is read out as-is.
pub fn describe(event: &OrderEvent, catalog: &Catalog) -> String {
    match event {
        OrderEvent::OrderStarted => ORDER_STARTED.to_string(),
        OrderEvent::CategorySelected(id) => {
            let label = catalog.category(id).map(|c| c.label.as_str()).unwrap_or(id.as_str());
            format!("{} selecionado", label)
        }
        OrderEvent::ItemAdded(line) => format!("Adicionado {} ao carrinho", line.name()),
        OrderEvent::ItemRemoved { line, .. } => format!("Item {} removido do carrinho", line.name()),
        OrderEvent::PaymentOpened => PAYMENT_SCREEN.to_string(),
        OrderEvent::PaymentCancelled => PAYMENT_CANCELLED.to_string(),
        OrderEvent::PaymentConfirmed { method, order_number } => format!(
            "Pagamento com {} confirmado. Aguarde seu pedido, número {}.",
            payment_method(*method),
            order_number.spoken()
        ),
        OrderEvent::ReturnedToMenu => BACK_TO_MENU.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::catalog::CategoryId;
    use crate::app::domain::order::{CartLine, OrderNumber};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_money_format() {
        assert_eq!(money(Price::from_cents(1200)), "R$ 12,00");
        assert_eq!(money(Price::ZERO), "R$ 0,00");
    }

    #[test]
    fn test_item_hover() {
        let catalog = Catalog::load_default().unwrap();
        assert_eq!(item_hover(catalog.item("iced-tea").unwrap()), "Chá Gelado, 7,00 reais");
    }

    #[test]
    fn test_describe_events() {
        let catalog = Catalog::load_default().unwrap();
        assert_eq!(
            describe(&OrderEvent::CategorySelected(CategoryId::new("sides")), &catalog),
            "Acompanhamentos selecionado"
        );
        assert_eq!(
            describe(&OrderEvent::CategorySelected(CategoryId::new("desserts")), &catalog),
            "desserts selecionado"
        );
        let line = CartLine::new("Batata Frita", Price::from_cents(1200));
        assert_eq!(
            describe(&OrderEvent::ItemAdded(line.clone()), &catalog),
            "Adicionado Batata Frita ao carrinho"
        );
        assert_eq!(
            describe(&OrderEvent::ItemRemoved { index: 0, line }, &catalog),
            "Item Batata Frita removido do carrinho"
        );
    }

    #[test]
    fn test_describe_confirmation_reads_number() {
        let catalog = Catalog::load_default().unwrap();
        let order_number = OrderNumber::generate(&mut StdRng::seed_from_u64(3));
        let text = describe(
            &OrderEvent::PaymentConfirmed {
                method: PaymentMethod::Card,
                order_number,
            },
            &catalog,
        );
        assert_eq!(
            text,
            format!(
                "Pagamento com cartão confirmado. Aguarde seu pedido, número PED {}.",
                order_number.value()
            )
        );
    }

    #[test]
    fn test_toggle_phrases() {
        assert_eq!(voice_toggled(false), "Voz desativada");
        assert_eq!(color_vision_toggled(true), "Modo dicromacia ativado");
        assert_eq!(sign_language_toggled(true), "VLibras ativado");
    }
}
