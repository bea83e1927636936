use clap::Parser;
use hedron::{AttributeUsage, Geometry};

mod cli;
use cli::{Cli, Dump};

fn dump(geo: &Geometry, which: Dump) {
    match which.usage() {
        Some(usage) => {
            let attr = &geo[usage];
            for (i, tuple) in attr.data().tuples(attr.size()).enumerate() {
                println!("{i}\t{tuple:?}");
            }
        }
        None => {
            let arity = geo.mode().vertices_per_primitive();
            for (i, prim) in geo.index().tuples(arity).enumerate() {
                println!("{i}\t{prim:?}");
            }
        }
    }
}

pub fn main() -> Result<(), strata::Error> {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let provider = strata::terrain::provider();
    let mut geo = strata::terrain_geometry()?;
    for _ in 1..cli.repeat {
        let next = strata::terrain_geometry()?;
        if !std::ptr::eq(geo, next) {
            tracing::error!("terrain geometry was rebuilt");
        }
        geo = next;
    }
    tracing::info!(
        requests = cli.repeat.max(1),
        builds = provider.build_count(),
        "obtained terrain geometry"
    );

    println!("mode:       {:?}", geo.mode());
    println!("vertices:   {}", geo.vertex_count());
    println!("primitives: {}", geo.primitive_count());

    let mut usages: Vec<AttributeUsage> = geo.attributes().keys().copied().collect();
    usages.sort_unstable();
    for usage in usages {
        let attr = &geo[usage];
        println!(
            "attribute:  {usage} ({:?}, {} components)",
            attr.attr_type(),
            attr.len()
        );
    }

    match geo.bounds() {
        Some(bounds) => {
            println!(
                "bounds:     [{}, {}, {}] .. [{}, {}, {}]",
                bounds.mins.x,
                bounds.mins.y,
                bounds.mins.z,
                bounds.maxs.x,
                bounds.maxs.y,
                bounds.maxs.z
            );
            if let Some(p) = cli.probe {
                println!(
                    "probe:      [{}, {}, {}] is {}",
                    p.x,
                    p.y,
                    p.z,
                    if bounds.contains(&p) {
                        "inside"
                    } else {
                        "outside"
                    }
                );
            }
        }
        None => tracing::warn!("terrain geometry has no vertices"),
    }

    #[cfg(feature = "wgpu")]
    {
        for (location, usage) in [
            AttributeUsage::Position,
            AttributeUsage::Normal,
            AttributeUsage::Texcoord(0),
        ]
        .into_iter()
        .enumerate()
        {
            let attr = &geo[usage];
            tracing::debug!(
                %usage,
                stride = attr.array_stride(),
                layout = ?attr.wgpu_attribute(location as u32),
                "vertex buffer layout"
            );
        }
    }

    if let Some(which) = cli.dump {
        dump(geo, which);
    }

    Ok(())
}
