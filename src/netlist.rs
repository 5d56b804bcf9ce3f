//! Translation from the component graph to an abstract DC netlist.
//!
//! The netlist is a plain value type: a list of voltage sources and
//! resistors referenced by [`NetId`], plus the net name table. Building it
//! never touches a numeric engine; the solver consumes the finished value
//! through the [`DcSolver`](crate::solver::DcSolver) boundary.
//!
//! Batteries get a fault pre-check here: a battery whose plus and minus
//! terminals landed on the same net is shorted at its own terminals. It
//! is excluded from the netlist entirely and its 1-based position (order
//! of appearance among batteries) is recorded for diagnostics.

use crate::circuit::{CircuitSnapshot, ComponentId, NetId};
use crate::error::{BreadboardError, Result};
use crate::nets::{merge_nets, NetMap};
use crate::sim::SimulationConfig;

/// One element of the abstract netlist.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// An ideal voltage source. The branch current solved for it is keyed
    /// by `source` in the solution.
    VoltageSource {
        source: ComponentId,
        plus: NetId,
        minus: NetId,
        volts: f64,
    },
    /// A fixed resistor.
    Resistor { a: NetId, b: NetId, ohms: f64 },
}

/// The abstract netlist handed to the DC solver.
#[derive(Debug, Clone, Default)]
pub struct Netlist {
    pub elements: Vec<Element>,
    /// Display names indexed by `NetId`; index 0 is `"gnd"`
    pub net_names: Vec<String>,
}

impl Netlist {
    /// Number of nets, ground included.
    pub fn net_count(&self) -> usize {
        self.net_names.len()
    }

    /// Number of voltage sources (= branch current variables).
    pub fn source_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::VoltageSource { .. }))
            .count()
    }
}

/// A successful translation: the netlist, the terminal-to-net mapping the
/// interpreter needs, and any batteries excluded as self-shorted.
#[derive(Debug, Clone)]
pub struct Translation {
    pub netlist: Netlist,
    pub nets: NetMap,
    /// 1-based positions of batteries shorted at their own terminals
    pub shorted_batteries: Vec<usize>,
}

/// Translate a snapshot into an abstract netlist.
///
/// Fails when the circuit is incomplete: empty collections
/// ([`BreadboardError::EmptyCircuit`]), or no battery minus terminal to
/// anchor ground ([`BreadboardError::MissingGround`]). The caller then
/// reports an open circuit without invoking the solver.
pub fn translate(circuit: &CircuitSnapshot, config: &SimulationConfig) -> Result<Translation> {
    if circuit.is_empty() {
        return Err(BreadboardError::EmptyCircuit);
    }

    let mut merger = merge_nets(circuit);
    let mut nets =
        NetMap::build(&mut merger, circuit.nodes()).ok_or(BreadboardError::MissingGround)?;

    let mut elements = Vec::new();
    let mut shorted_batteries = Vec::new();

    for (index, battery) in circuit.batteries().enumerate() {
        let position = index + 1;
        let (Some(plus), Some(minus)) = (nets.net_of(battery.plus), nets.net_of(battery.minus))
        else {
            continue;
        };

        if plus == minus {
            // Shorted at its own terminals: no element, just the fault
            shorted_batteries.push(position);
            continue;
        }

        // An ideal source pinned directly between plus and minus would
        // make parallel same-voltage batteries singular. Split it through
        // a synthetic internal net with the internal series resistance.
        let internal = nets.push_net(format!("vbat{position}"));
        elements.push(Element::VoltageSource {
            source: battery.id,
            plus: internal,
            minus,
            volts: config.battery_voltage,
        });
        elements.push(Element::Resistor {
            a: plus,
            b: internal,
            ohms: config.battery_internal_resistance,
        });
    }

    for bulb in circuit.bulbs() {
        let (Some(a), Some(b)) = (nets.net_of(bulb.terminals[0]), nets.net_of(bulb.terminals[1]))
        else {
            continue;
        };
        elements.push(Element::Resistor {
            a,
            b,
            ohms: config.bulb_resistance,
        });
    }

    for pot in circuit.potentiometers() {
        let (Some(a), Some(b)) = (nets.net_of(pot.terminals[0]), nets.net_of(pot.terminals[1]))
        else {
            continue;
        };
        elements.push(Element::Resistor {
            a,
            b,
            ohms: pot.resistance(),
        });
    }

    let netlist = Netlist {
        elements,
        net_names: nets.names().to_vec(),
    };

    Ok(Translation {
        netlist,
        nets,
        shorted_batteries,
    })
}
