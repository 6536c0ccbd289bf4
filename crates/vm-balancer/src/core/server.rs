//! Server state.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use crate::core::common::{PlacementVerdict, EPSILON};
use crate::core::error::BalancerError;
use crate::core::vm::Vm;

/// Stores server properties (capacity in slots) and state (initial load, hosted VMs).
///
/// The initial load is kept as the percentage it was given and the hosted VMs as an integer number of slots,
/// so a server reports exactly the load it was created with until some VM is placed on it.
#[derive(Clone, Debug)]
pub struct Server {
    name: String,
    capacity: u32,
    initial_load: f64,
    hosted_slots: u64,
    vms: BTreeSet<u32>,
}

impl Server {
    /// Creates empty server with specified capacity.
    pub fn new(name: &str, capacity: u32) -> Self {
        Self {
            name: name.to_string(),
            capacity,
            initial_load: 0.,
            hosted_slots: 0,
            vms: BTreeSet::new(),
        }
    }

    /// Creates server with specified capacity which is already loaded by `load_percentage` percent.
    ///
    /// Returns an error if the load is not a percentage in `[0, 100]`.
    pub fn with_load(name: &str, capacity: u32, load_percentage: f64) -> Result<Self, BalancerError> {
        if !(0. ..=100.).contains(&load_percentage) {
            return Err(BalancerError::InvalidLoad {
                server: name.to_string(),
                load: load_percentage,
            });
        }
        let mut server = Self::new(name, capacity);
        server.initial_load = load_percentage;
        Ok(server)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the total capacity of server in slots.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the number of slots currently in use, including the initial load.
    pub fn used_slots(&self) -> f64 {
        if self.capacity == 0 {
            return 0.;
        }
        self.capacity as f64 * self.initial_load / 100. + self.hosted_slots as f64
    }

    /// Returns the number of slots occupied by VMs placed on this server.
    pub fn hosted_slots(&self) -> u64 {
        self.hosted_slots
    }

    /// Returns the share of capacity currently in use, in percents.
    /// Server with zero capacity is always reported as 0% loaded.
    pub fn load_percentage(&self) -> f64 {
        if self.capacity == 0 {
            return 0.;
        }
        self.initial_load + self.hosted_slots as f64 * 100. / self.capacity as f64
    }

    /// Returns the number of slots which can still be occupied by VMs.
    pub fn free_capacity(&self) -> f64 {
        (self.capacity as f64 * (100. - self.load_percentage()) / 100.).max(0.)
    }

    /// Checks if the specified VM can currently be placed on this server.
    ///
    /// Zero-capacity servers accept nothing, not even VMs of size 0.
    pub fn check_placement(&self, vm: &Vm) -> PlacementVerdict {
        if self.vms.contains(&vm.id()) {
            return PlacementVerdict::AlreadyHosted;
        }
        if self.capacity == 0 {
            return PlacementVerdict::ZeroCapacity;
        }
        // Tolerance covers rounding of the free capacity only, hosted slots are counted exactly.
        if vm.size() as f64 > self.free_capacity() + EPSILON {
            return PlacementVerdict::NotEnoughCapacity;
        }
        PlacementVerdict::Success
    }

    pub fn can_host(&self, vm: &Vm) -> bool {
        self.check_placement(vm) == PlacementVerdict::Success
    }

    /// Places the VM on this server and increases its load by `vm.size / capacity * 100` percents.
    ///
    /// The server state is left untouched if the placement is not possible.
    pub fn host(&mut self, vm: &Vm) -> Result<(), BalancerError> {
        let verdict = self.check_placement(vm);
        if verdict != PlacementVerdict::Success {
            return Err(BalancerError::PlacementRejected {
                server: self.name.clone(),
                vm_id: vm.id(),
                verdict,
            });
        }
        self.hosted_slots += vm.size() as u64;
        self.vms.insert(vm.id());
        Ok(())
    }

    pub fn contains(&self, vm: &Vm) -> bool {
        self.vms.contains(&vm.id())
    }

    pub fn vm_count(&self) -> usize {
        self.vms.len()
    }

    /// Returns IDs of hosted VMs in ascending order.
    pub fn hosted_vms(&self) -> impl Iterator<Item = u32> + '_ {
        self.vms.iter().copied()
    }
}

impl Display for Server {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.1}% ({:.1}/{} slots, {} vms)",
            self.name,
            self.load_percentage(),
            self.used_slots(),
            self.capacity,
            self.vms.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_server_is_never_loaded() {
        let server = Server::with_load("s", 0, 70.).unwrap();
        assert_eq!(server.load_percentage(), 0.);
        assert_eq!(server.free_capacity(), 0.);
        assert_eq!(server.check_placement(&Vm::new(0, 0)), PlacementVerdict::ZeroCapacity);
    }

    #[test]
    fn initial_load_defines_free_capacity() {
        let server = Server::with_load("s", 10, 90.).unwrap();
        assert!((server.free_capacity() - 1.).abs() < EPSILON);
        assert!(server.can_host(&Vm::new(0, 1)));
        assert_eq!(server.check_placement(&Vm::new(1, 2)), PlacementVerdict::NotEnoughCapacity);
    }

    #[test]
    fn load_outside_of_percentage_range_is_rejected() {
        assert!(matches!(
            Server::with_load("s", 10, 100.5),
            Err(BalancerError::InvalidLoad { .. })
        ));
        assert!(Server::with_load("s", 10, -1.).is_err());
        assert!(Server::with_load("s", 10, f64::NAN).is_err());
    }

    #[test]
    fn thirds_fill_server_completely() {
        let mut server = Server::new("s", 3);
        for id in 0..3 {
            server.host(&Vm::new(id, 1)).unwrap();
        }
        assert!((server.load_percentage() - 100.).abs() < EPSILON);
        assert!(!server.can_host(&Vm::new(3, 1)));
        assert!(server.can_host(&Vm::new(4, 0)));
    }

    #[test]
    fn same_vm_is_hosted_once() {
        let mut server = Server::new("s", 10);
        let vm = Vm::new(7, 2);
        server.host(&vm).unwrap();
        let err = server.host(&vm).unwrap_err();
        assert!(matches!(
            err,
            BalancerError::PlacementRejected {
                verdict: PlacementVerdict::AlreadyHosted,
                ..
            }
        ));
        assert_eq!(server.vm_count(), 1);
        assert_eq!(server.load_percentage(), 20.);
    }

    #[test]
    fn initial_load_is_reported_as_given() {
        for capacity in [1, 3, 7, 11, 100] {
            for load in [10., 33.3, 55., 90.] {
                let server = Server::with_load("s", capacity, load).unwrap();
                assert_eq!(server.load_percentage(), load);
            }
        }
    }

    #[test]
    fn hosted_slots_are_added_to_initial_load() {
        let mut server = Server::with_load("s", 100, 45.).unwrap();
        server.host(&Vm::new(0, 10)).unwrap();
        assert_eq!(server.hosted_slots(), 10);
        assert_eq!(server.load_percentage(), 55.);
    }

    #[test]
    fn display_shows_load() {
        let mut server = Server::new("h1", 4);
        server.host(&Vm::new(0, 1)).unwrap();
        assert_eq!(server.to_string(), "h1: 25.0% (1.0/4 slots, 1 vms)");
    }
}
