//! Order-to-invoice conversion.
//!
//! Invoked once per "create invoice from order" action. Copies the typed
//! transport mode, the renamed header fields (declarative table below), the
//! dimension rows verbatim, and one invoice line per order line with
//! traceability back to the source row and order. The returned invoice is
//! ready for display/edit; the host runs validation when it is saved.

use freightflow_core::{DocumentId, DomainError, DomainResult, copy_mapped_fields};
use freightflow_freight::DimensionRow;
use freightflow_sales::{SalesOrderDirectory, SalesOrderId};

use crate::invoice::{InvoiceItem, SalesInvoice, SalesInvoiceId};

/// Header fields whose names differ between order and invoice schemas.
/// Ordered `(order_key, invoice_key)` pairs; a pair is skipped when the
/// order does not carry the source key.
pub const HEADER_FIELD_MAP: &[(&str, &str)] = &[
    ("pol_aol", "pol"),
    ("pod_aod", "pod"),
    ("country_origin", "country_of_origin"),
    ("eta", "eta"),
    ("etd", "etd"),
];

/// Build (or extend) a sales invoice from the identified order.
///
/// `target` carries an in-progress invoice when the host maps several orders
/// into one; rows are appended to it. `NotFound` is the only failure.
pub fn make_sales_invoice(
    orders: &SalesOrderDirectory,
    source: SalesOrderId,
    target: Option<SalesInvoice>,
) -> DomainResult<SalesInvoice> {
    let order = orders.get(source).ok_or_else(DomainError::not_found)?;

    let mut invoice =
        target.unwrap_or_else(|| SalesInvoice::new(SalesInvoiceId::new(DocumentId::new())));

    invoice.mode = order.mode.clone();
    copy_mapped_fields(HEADER_FIELD_MAP, &order.header, &mut invoice.header);

    for row in &order.dimensions {
        invoice.dimensions.push(DimensionRow {
            no_of_boxes: row.no_of_boxes,
            length_cm: row.length_cm,
            breadth_cm: row.breadth_cm,
            height_cm: row.height_cm,
            weight_kg: row.weight_kg,
            volume_weight: row.volume_weight,
            cbm: row.cbm,
        });
    }

    for item in &order.items {
        invoice.items.push(InvoiceItem {
            row_id: DocumentId::new(),
            so_detail: Some(item.row_id),
            sales_order: Some(order.id),
            charge: item.charge.clone(),
        });
    }

    Ok(invoice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use freightflow_freight::{ChargeItem, TransportMode};
    use freightflow_sales::{OrderItem, SalesOrder};

    fn init_logging() {
        freightflow_observability::init();
    }

    fn source_order() -> SalesOrder {
        let mut order = SalesOrder::new(SalesOrderId::new(DocumentId::new()));
        order.mode = TransportMode::SeaLclImport;
        order.header.insert("pol_aol".into(), "NHAVA SHEVA".into());
        order.header.insert("pod_aod".into(), "JEBEL ALI".into());
        order
            .header
            .insert("eta".into(), NaiveDate::from_ymd_opt(2026, 9, 2).unwrap().into());
        order.dimensions = vec![DimensionRow {
            length_cm: Some(100.0),
            breadth_cm: Some(100.0),
            height_cm: Some(100.0),
            no_of_boxes: Some(10.0),
            weight_kg: Some(75.0),
            ..DimensionRow::default()
        }];
        order.items = vec![OrderItem::new(ChargeItem {
            custom_rate: Some(2.0),
            formula: true,
            ..ChargeItem::default()
        })];
        order.validate();
        order
    }

    fn directory_with(order: SalesOrder) -> SalesOrderDirectory {
        let mut directory = SalesOrderDirectory::new();
        directory.insert(order).unwrap();
        directory
    }

    #[test]
    fn unknown_source_order_is_not_found() {
        let directory = SalesOrderDirectory::new();
        let err = make_sales_invoice(&directory, SalesOrderId::new(DocumentId::new()), None)
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn maps_header_fields_through_the_table() {
        init_logging();
        let order = source_order();
        let source_id = order.id;
        let directory = directory_with(order);

        let invoice = make_sales_invoice(&directory, source_id, None).unwrap();

        assert_eq!(
            invoice.header.get("pol").and_then(|v| v.as_text()),
            Some("NHAVA SHEVA")
        );
        assert_eq!(
            invoice.header.get("pod").and_then(|v| v.as_text()),
            Some("JEBEL ALI")
        );
        assert_eq!(
            invoice.header.get("eta").and_then(|v| v.as_date()),
            NaiveDate::from_ymd_opt(2026, 9, 2)
        );
        // etd absent on the order, silently skipped.
        assert!(invoice.header.get("etd").is_none());
        // Source-schema names never leak onto the invoice.
        assert!(invoice.header.get("pol_aol").is_none());
        assert_eq!(invoice.mode, TransportMode::SeaLclImport);
    }

    #[test]
    fn copies_dimension_rows_verbatim_including_derived_fields() {
        let order = source_order();
        let source_id = order.id;
        let source_row = order.dimensions[0].clone();
        let directory = directory_with(order);

        let invoice = make_sales_invoice(&directory, source_id, None).unwrap();

        assert_eq!(invoice.dimensions.len(), 1);
        assert_eq!(invoice.dimensions[0], source_row);
        assert_eq!(invoice.dimensions[0].cbm, 10.0);
    }

    #[test]
    fn invoice_lines_carry_source_linkage() {
        let order = source_order();
        let source_id = order.id;
        let source_row_id = order.items[0].row_id;
        let directory = directory_with(order);

        let invoice = make_sales_invoice(&directory, source_id, None).unwrap();

        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].so_detail, Some(source_row_id));
        assert_eq!(invoice.items[0].sales_order, Some(source_id));
        // Pricing inputs carry over untouched.
        assert_eq!(invoice.items[0].charge.custom_rate, Some(2.0));
        assert!(invoice.items[0].charge.formula);
    }

    #[test]
    fn in_progress_target_accumulates_rows() {
        let first = source_order();
        let second = source_order();
        let first_id = first.id;
        let second_id = second.id;

        let mut directory = SalesOrderDirectory::new();
        directory.insert(first).unwrap();
        directory.insert(second).unwrap();

        let invoice = make_sales_invoice(&directory, first_id, None).unwrap();
        let invoice = make_sales_invoice(&directory, second_id, Some(invoice)).unwrap();

        assert_eq!(invoice.dimensions.len(), 2);
        assert_eq!(invoice.items.len(), 2);
        assert_eq!(invoice.items[0].sales_order, Some(first_id));
        assert_eq!(invoice.items[1].sales_order, Some(second_id));
    }

    #[test]
    fn converted_invoice_validates_to_the_same_totals() {
        let order = source_order();
        let source_id = order.id;
        let order_totals = order.totals;
        let order_total_inr = order.total_inr;
        let directory = directory_with(order);

        let mut invoice = make_sales_invoice(&directory, source_id, None).unwrap();
        invoice.validate();

        assert_eq!(invoice.totals, order_totals);
        assert_eq!(invoice.total_inr, order_total_inr);
    }
}
