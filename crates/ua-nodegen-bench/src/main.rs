//! Emission throughput benchmark using a synthetic plant model.
//!
//! Builds a nodeset of device objects with variables, methods, and wiring
//! references, then measures how fast the emitter turns it into C text.

use std::time::Instant;

use rustc_hash::FxHashSet;
use ua_nodegen::model::{ns0, NodeBuilder, NodeId, QualifiedName, Reference, Scalar, Value};
use ua_nodegen::{emit_node, emit_reference, EmitContext, Node};
use uuid::Uuid;

const DEVICES: u32 = 10_000;
const SAMPLES_PER_DEVICE: usize = 16;

// Namespace of the synthetic model
const NS: u16 = 2;

// Id block offsets, one block per node class
const ID_DEVICE: u32 = 100_000;
const ID_TEMPERATURE: u32 = 200_000;
const ID_SAMPLES: u32 = 300_000;
const ID_SERIAL: u32 = 400_000;
const ID_RESET: u32 = 500_000;

// =============================================================================
// MODEL SYNTHESIS
// =============================================================================

fn build_device(index: u32) -> Vec<Node> {
    let device_id = NodeId::numeric(NS, ID_DEVICE + index);

    let device = NodeBuilder::new(device_id, QualifiedName::new(NS, format!("Device{index}")))
        .display_name(format!("Device {index}"))
        .description("Synthetic plant device")
        .object(|o| o.event_notifier = index % 2 == 0);

    let temperature = NodeBuilder::new(
        NodeId::numeric(NS, ID_TEMPERATURE + index),
        QualifiedName::new(NS, "Temperature"),
    )
    .display_name("Temperature")
    .variable(|v| {
        v.access_level = 1;
        v.user_access_level = 1;
        v.value_rank = -1;
        v.minimum_sampling_interval = 100.0;
        v.value = Some(Value::Scalar(Scalar::Double(20.0 + f64::from(index % 50))));
    });

    let samples = NodeBuilder::new(
        NodeId::numeric(NS, ID_SAMPLES + index),
        QualifiedName::new(NS, "Samples"),
    )
    .display_name("Samples")
    .variable(|v| {
        v.access_level = 1;
        v.user_access_level = 1;
        v.value_rank = 1;
        v.value = Some(Value::Array(
            (0..SAMPLES_PER_DEVICE)
                .map(|i| Scalar::Int32(index as i32 + i as i32))
                .collect(),
        ));
    });

    // A GUID-identified configuration node, so the id formatting paths
    // beyond numeric ids stay on the hot path too.
    let serial = NodeBuilder::new(
        NodeId::guid(NS, Uuid::from_u128(0x1000_0000_0000_0000_0000_0000_0000 + u128::from(index))),
        QualifiedName::new(NS, "SerialNumber"),
    )
    .display_name("SerialNumber")
    .variable(|v| {
        v.access_level = 1;
        v.user_access_level = 1;
        v.value_rank = -1;
        v.value = Some(Value::Scalar(Scalar::String(format!("SN-{index:08}"))));
    });

    let reset = NodeBuilder::new(
        NodeId::numeric(NS, ID_RESET + index),
        QualifiedName::new(NS, "Reset"),
    )
    .display_name("Reset")
    .method(|m| {
        m.executable = true;
        m.user_executable = true;
    });

    vec![device, temperature, samples, serial, reset]
}

fn build_references(index: u32) -> Vec<Reference> {
    let device_id = NodeId::numeric(NS, ID_DEVICE + index);
    let mut refs = vec![Reference {
        source: ns0::OBJECTS_FOLDER,
        reference_type: ns0::ORGANIZES,
        target: device_id.clone().into(),
        is_forward: true,
    }];
    for component in [ID_TEMPERATURE, ID_SAMPLES, ID_RESET] {
        refs.push(Reference {
            source: device_id.clone(),
            reference_type: ns0::HAS_COMPONENT,
            target: NodeId::numeric(NS, component + index).into(),
            is_forward: true,
        });
    }
    // One inverse edge per device to exercise that form as well.
    refs.push(Reference {
        source: device_id,
        reference_type: ns0::ORGANIZES,
        target: ns0::OBJECTS_FOLDER.into(),
        is_forward: false,
    });
    refs
}

// =============================================================================
// BENCHMARK
// =============================================================================

fn main() {
    let devices: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEVICES);

    println!("Synthesizing {devices} devices...");
    let build_start = Instant::now();
    let mut nodes = Vec::with_capacity(devices as usize * 5);
    let mut references = Vec::with_capacity(devices as usize * 5);
    for index in 0..devices {
        nodes.extend(build_device(index));
        references.extend(build_references(index));
    }
    let build_time = build_start.elapsed();
    println!(
        "Built {} nodes and {} references in {:?}",
        nodes.len(),
        references.len(),
        build_time
    );

    let parents: FxHashSet<NodeId> = [ns0::ORGANIZES, ns0::HAS_COMPONENT].into_iter().collect();
    let ctx = EmitContext::new(&parents);

    // Warmup
    for node in nodes.iter().take(100) {
        let _ = emit_node(node, &ctx).expect("emission failed");
    }

    let emit_start = Instant::now();
    let mut output = String::new();
    for node in &nodes {
        output.push_str(&emit_node(node, &ctx).expect("emission failed"));
        output.push('\n');
    }
    for reference in &references {
        output.push_str(&emit_reference(reference));
        output.push('\n');
    }
    let emit_time = emit_start.elapsed();

    let statements = output.lines().filter(|l| !l.is_empty()).count();

    println!("\n=== Emission ===");
    println!("Output: {} bytes ({} statements)", output.len(), statements);
    println!("Time: {emit_time:?}");
    println!(
        "Throughput: {:.2} MB/s, {:.0} nodes/s",
        (output.len() as f64 / 1_000_000.0) / emit_time.as_secs_f64(),
        nodes.len() as f64 / emit_time.as_secs_f64()
    );
}
