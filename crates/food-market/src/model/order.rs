//! Orders, their priced lines and the status enumeration.
//!
//! An order is assembled once by the [`OrderAssembler`](crate::assembler::OrderAssembler)
//! and afterwards only its `status` changes, through the
//! [`OrderLifecycle`](crate::lifecycle::OrderLifecycle).

use crate::model::{CustomerId, Menu, MenuId, SellerId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Status of an order.
///
/// ```text
///             accept              complete
///   Created ─────────► Accepted ───────────► Completed
///      │                  │
///      │ reject           │ cancel
///      ▼                  ▼
///   Rejected          Cancelled ◄── cancel ── Created
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Accepted,
    Rejected,
    Cancelled,
    Completed,
}

impl OrderStatus {
    /// The status every new order starts in.
    pub const INITIAL: OrderStatus = OrderStatus::Created;

    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_become(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Created, Accepted)
                | (Created, Rejected)
                | (Created, Cancelled)
                | (Accepted, Cancelled)
                | (Accepted, Completed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrderStatus::Rejected | OrderStatus::Cancelled | OrderStatus::Completed
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Created => "created",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// One `(menu, quantity)` pair as requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub menu_id: MenuId,
    pub quantity: u32,
}

impl OrderLineRequest {
    pub fn new(menu_id: MenuId, quantity: u32) -> Self {
        Self { menu_id, quantity }
    }
}

/// A priced line of an order, carrying the menu as it was when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_id: MenuId,
    pub menu: Menu,
    pub quantity: u32,
    #[serde(rename = "total_price")]
    pub line_total: f64,
}

impl OrderLine {
    /// Prices `quantity` units of `menu`.
    pub fn new(menu: Menu, quantity: u32) -> Self {
        Self {
            menu_id: menu.menu_id,
            line_total: f64::from(quantity) * menu.price,
            menu,
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub seller_id: SellerId,
    pub source_address: String,
    pub delivery_address: String,
    #[serde(rename = "order_details")]
    pub lines: Vec<OrderLine>,
    pub total_price: f64,
    pub status: OrderStatus,
}

/// Everything needed to assemble an order with explicit addresses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_id: CustomerId,
    pub seller_id: SellerId,
    pub source_address: String,
    pub delivery_address: String,
    #[serde(rename = "menus")]
    pub lines: Vec<OrderLineRequest>,
}

/// Order as placed by a customer: addresses are taken from the seller and customer records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBody {
    pub customer_id: CustomerId,
    pub seller_id: SellerId,
    pub menus: Vec<OrderLineRequest>,
}

/// Mutations an order document accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OrderPatch {
    /// Conditional status change: applied only if the stored status is still `from`.
    Status { from: OrderStatus, to: OrderStatus },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(price: f64) -> Menu {
        Menu {
            menu_id: MenuId(3),
            seller_id: SellerId(1),
            name: "Nasi Goreng".to_string(),
            description: "Fried rice".to_string(),
            price,
            calorie: 650.0,
            image_url: "https://img.example/nasi.png".to_string(),
        }
    }

    #[test]
    fn test_line_total_is_quantity_times_price() {
        let line = OrderLine::new(menu(12.5), 3);
        assert_eq!(line.menu_id, MenuId(3));
        assert_eq!(line.line_total, 37.5);
    }

    #[test]
    fn test_transition_table() {
        use OrderStatus::*;
        assert!(Created.can_become(Accepted));
        assert!(Created.can_become(Rejected));
        assert!(Accepted.can_become(Completed));
        assert!(!Accepted.can_become(Accepted));
        assert!(!Accepted.can_become(Rejected));
        assert!(!Completed.can_become(Cancelled));
        for terminal in [Rejected, Cancelled, Completed] {
            assert!(terminal.is_terminal());
            for next in [Created, Accepted, Rejected, Cancelled, Completed] {
                assert!(!terminal.can_become(next));
            }
        }
    }

    #[test]
    fn test_persisted_field_names() {
        let order = Order {
            order_id: OrderId(9),
            customer_id: CustomerId(2),
            seller_id: SellerId(1),
            source_address: "Jl. Sudirman 1".to_string(),
            delivery_address: "Jl. Thamrin 5".to_string(),
            lines: vec![OrderLine::new(menu(10.0), 2)],
            total_price: 20.0,
            status: OrderStatus::Created,
        };

        let doc = serde_json::to_value(&order).unwrap();
        assert_eq!(doc["order_id"], 9);
        assert_eq!(doc["customer_id"], 2);
        assert_eq!(doc["status"], "created");
        assert_eq!(doc["order_details"][0]["menu_id"], 3);
        assert_eq!(doc["order_details"][0]["total_price"], 20.0);
        assert_eq!(doc["order_details"][0]["menu"]["seller_id"], 1);
    }

    #[test]
    fn test_order_body_reads_menus_list() {
        let body: OrderBody = serde_json::from_str(
            r#"{"customer_id": 2, "seller_id": 1, "menus": [{"menu_id": 3, "quantity": 4}]}"#,
        )
        .unwrap();
        assert_eq!(body.menus, vec![OrderLineRequest::new(MenuId(3), 4)]);
    }
}
