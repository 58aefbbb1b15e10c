//! Stored-document vectors.
//!
//! Slot contents as they have been seen in the wild: documents written by
//! this crate, by older page scripts with stringly-typed fields, and plain
//! garbage. Each vector pins how the document must read.

use basket_core::Cart;

/// A known slot content and how it must read.
#[derive(Debug, Clone)]
pub struct StoredVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Raw slot content.
    pub document: &'static str,
    /// Expected number of line items after decoding.
    pub expected_len: usize,
    /// Expected `count()`.
    pub expected_count: i64,
    /// Expected `total()`.
    pub expected_total: f64,
}

/// Get all stored-document vectors.
pub fn all_vectors() -> Vec<StoredVector> {
    vec![
        StoredVector {
            name: "empty array",
            document: "[]",
            expected_len: 0,
            expected_count: 0,
            expected_total: 0.0,
        },
        StoredVector {
            name: "two well-formed items",
            document: r#"[{"id":1,"title":"A","price":9.99,"image":"a.jpg","qty":2},{"id":2,"title":"B","price":5,"image":"b.jpg","qty":1}]"#,
            expected_len: 2,
            expected_count: 3,
            expected_total: 24.98,
        },
        StoredVector {
            name: "stringly-typed fields",
            document: r#"[{"id":"4","title":"Running Sneakers","price":"79.50","image":"s.jpg","qty":"2"}]"#,
            expected_len: 1,
            expected_count: 2,
            expected_total: 159.0,
        },
        StoredVector {
            name: "non-numeric quantity counts as zero",
            document: r#"[{"id":1,"price":10,"qty":"lots"},{"id":2,"price":1,"qty":3}]"#,
            expected_len: 2,
            expected_count: 3,
            expected_total: 3.0,
        },
        StoredVector {
            name: "unreachable elements skipped",
            document: r#"[null, 7, {"title":"no id"}, {"id":"x"}, {"id":9,"price":2,"qty":1}]"#,
            expected_len: 1,
            expected_count: 1,
            expected_total: 2.0,
        },
        StoredVector {
            name: "duplicate ids keep the first",
            document: r#"[{"id":1,"price":1,"qty":1},{"id":1,"price":1,"qty":5}]"#,
            expected_len: 1,
            expected_count: 1,
            expected_total: 1.0,
        },
        StoredVector {
            name: "truncated JSON",
            document: "{not json",
            expected_len: 0,
            expected_count: 0,
            expected_total: 0.0,
        },
        StoredVector {
            name: "object instead of array",
            document: r#"{"id":1,"qty":1}"#,
            expected_len: 0,
            expected_count: 0,
            expected_total: 0.0,
        },
        StoredVector {
            name: "empty string",
            document: "",
            expected_len: 0,
            expected_count: 0,
            expected_total: 0.0,
        },
    ]
}

/// Decode a vector the way the cart store reads its slot.
pub fn read_vector(vector: &StoredVector) -> Cart {
    Cart::decode(vector.document).unwrap_or_default()
}

/// Verify all vectors. Returns a description of the first mismatch.
pub fn verify_all_vectors() -> Result<(), String> {
    for vector in all_vectors() {
        let cart = read_vector(&vector);
        if cart.len() != vector.expected_len {
            return Err(format!(
                "{}: expected {} items, got {}",
                vector.name,
                vector.expected_len,
                cart.len()
            ));
        }
        if cart.count() != vector.expected_count {
            return Err(format!(
                "{}: expected count {}, got {}",
                vector.name,
                vector.expected_count,
                cart.count()
            ));
        }
        if (cart.total() - vector.expected_total).abs() > 1e-9 {
            return Err(format!(
                "{}: expected total {}, got {}",
                vector.name,
                vector.expected_total,
                cart.total()
            ));
        }
    }
    Ok(())
}
