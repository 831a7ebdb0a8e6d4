//! Grouping a cart into per-warehouse delivery requests. This is the
//! validation gate for the whole flow: a cart only quotes and dispatches if
//! every line item resolves to a warehouse the provider knows.

use std::collections::HashMap;
use crate::{
    error::{Error, Result},
    models::{
        delivery::{DeliveryGroup, Package},
        dropoff::Dropoff,
        line_item::LineItem,
        warehouse::{WarehouseId, WarehouseRegistry},
    },
};

/// Group `line_items` by warehouse into provider-facing delivery requests,
/// all sharing `dropoff`.
///
/// Items are processed in their given order, and groups come back in the
/// order each warehouse first appeared, so serialization is deterministic.
/// Validation is fail-fast: the first item with a missing or unknown
/// warehouse aborts the build with an error and no groups escape — callers
/// never see (and so can never submit) a partial grouping.
///
/// An empty cart is a valid, empty build.
pub fn build(line_items: &[LineItem], warehouses: &WarehouseRegistry, dropoff: &Dropoff) -> Result<Vec<DeliveryGroup>> {
    let mut groups: Vec<DeliveryGroup> = Vec::new();
    let mut group_index: HashMap<WarehouseId, usize> = HashMap::new();
    for item in line_items {
        let warehouse_id = item.assigned_warehouse()
            .ok_or_else(|| Error::MissingWarehouseAssignment(item.product_id().clone()))?;
        let slot = match group_index.get(warehouse_id) {
            Some(slot) => *slot,
            None => {
                let pickup = warehouses.get(warehouse_id)
                    .ok_or_else(|| Error::UnknownWarehouse {
                        product_id: item.product_id().clone(),
                        warehouse_id: warehouse_id.clone(),
                    })?;
                groups.push(DeliveryGroup::new(pickup.clone(), dropoff.clone()));
                group_index.insert(warehouse_id.clone(), groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].push(Package::from_line_item(item));
    }
    Ok(groups)
}

/// Check every line item and report every problem, instead of stopping at
/// the first the way [`build`] does. Handy for surfacing a complete list in
/// an admin screen. This never builds groups; the compatibility path through
/// [`build`] doesn't use it.
pub fn validate(line_items: &[LineItem], warehouses: &WarehouseRegistry) -> Vec<Error> {
    let mut problems = Vec::new();
    for item in line_items {
        match item.assigned_warehouse() {
            None => {
                problems.push(Error::MissingWarehouseAssignment(item.product_id().clone()));
            }
            Some(warehouse_id) if !warehouses.contains(warehouse_id) => {
                problems.push(Error::UnknownWarehouse {
                    product_id: item.product_id().clone(),
                    warehouse_id: warehouse_id.clone(),
                });
            }
            Some(_) => {}
        }
    }
    problems
}
