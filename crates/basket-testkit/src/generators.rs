//! Proptest generators for property-based testing.

use basket::{CartStore, Product};
use basket_store::SlotStorage;
use proptest::prelude::*;
use serde_json::Value;

/// Generate a product id from a small range, so operations collide.
pub fn item_id() -> impl Strategy<Value = i64> {
    1i64..=6
}

/// Generate a product.
pub fn product() -> impl Strategy<Value = Product> {
    (item_id(), "[A-Za-z ]{1,16}", 0u32..100_000, "[a-z]{1,8}\\.jpg")
        .prop_map(|(id, title, cents, image)| {
            Product::new(id, title, f64::from(cents) / 100.0, image)
        })
}

/// Generate loose quantity input: numbers, numeric strings, garbage, null.
pub fn qty_input() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-20i64..50).prop_map(Value::from),
        "-?[0-9]{1,3}".prop_map(Value::from),
        "[0-9]{1,2}[a-z ]{1,4}".prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
        (-5.0f64..50.0).prop_map(Value::from),
        Just(Value::Null),
        Just(Value::Bool(true)),
    ]
}

/// Generate quantity input that never parses to a negative number.
pub fn non_negative_qty_input() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0i64..50).prop_map(Value::from),
        "[0-9]{1,3}".prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
        Just(Value::Null),
    ]
}

/// Generate an id as the UI might send it.
pub fn id_input() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => item_id().prop_map(Value::from),
        2 => item_id().prop_map(|id| Value::from(id.to_string())),
        1 => "[a-z]{1,4}".prop_map(Value::from),
    ]
}

/// Generate arbitrary slot contents, mostly array-shaped.
pub fn stored_document() -> impl Strategy<Value = String> {
    let element = prop_oneof![
        (id_input(), qty_input(), qty_input()).prop_map(|(id, qty, price)| {
            serde_json::json!({"id": id, "title": "t", "price": price, "image": "", "qty": qty})
        }),
        qty_input(),
    ];
    prop_oneof![
        4 => prop::collection::vec(element, 0..8)
            .prop_map(|elements| Value::Array(elements).to_string()),
        1 => ".{0,24}",
    ]
}

/// One user action against the cart.
#[derive(Debug, Clone)]
pub enum CartOp {
    Add { product: Product, qty: Value },
    ChangeQty { id: Value, delta: i64 },
    SetQty { id: Value, value: Value },
    Remove { id: Value },
}

impl CartOp {
    /// Run the action against `store`.
    pub fn apply<S: SlotStorage>(&self, store: &CartStore<S>) {
        match self {
            Self::Add { product, qty } => {
                store.add(product, qty.clone());
            }
            Self::ChangeQty { id, delta } => {
                store.change_qty(id.clone(), *delta);
            }
            Self::SetQty { id, value } => {
                store.set_qty(id.clone(), value.clone());
            }
            Self::Remove { id } => {
                store.remove(id.clone());
            }
        }
    }
}

impl Arbitrary for CartOp {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            4 => (product(), qty_input())
                .prop_map(|(product, qty)| CartOp::Add { product, qty }),
            2 => (id_input(), -1000i64..1000)
                .prop_map(|(id, delta)| CartOp::ChangeQty { id, delta }),
            2 => (id_input(), qty_input())
                .prop_map(|(id, value)| CartOp::SetQty { id, value }),
            1 => id_input().prop_map(|id| CartOp::Remove { id }),
        ]
        .boxed()
    }
}

/// Generate a sequence of up to `max_len` actions.
pub fn cart_ops(max_len: usize) -> impl Strategy<Value = Vec<CartOp>> {
    prop::collection::vec(any::<CartOp>(), 0..=max_len)
}
