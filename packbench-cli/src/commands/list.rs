// SPDX-License-Identifier: Apache-2.0

//! `packbench list` - show the codec registry.

use packbench_core::CodecRegistry;

pub fn execute() -> anyhow::Result<()> {
    let registry = CodecRegistry::builtin();

    println!("Registered codecs ({}):", registry.len());
    for codec in registry.iter() {
        let descriptor = codec.descriptor();
        match descriptor.reference {
            Some(link) => println!("  {:<12} {:<28} {}", descriptor.id, descriptor.label, link),
            None => println!("  {:<12} {}", descriptor.id, descriptor.label),
        }
    }

    Ok(())
}
