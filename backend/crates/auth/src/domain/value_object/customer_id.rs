use kernel::id::Id;

pub struct CustomerMarker;
pub type CustomerId = Id<CustomerMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_equality() {
        assert_eq!(CustomerId::new("cust-1"), CustomerId::from("cust-1"));
        assert_ne!(CustomerId::new("cust-1"), CustomerId::new("cust-2"));
    }
}
