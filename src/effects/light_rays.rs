use super::{singleton, EffectContext};
use crate::constants::*;
use crate::dom;
use autoscroll_core::effects::light_rays::LightRaySpec;
use autoscroll_core::Singleton;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Rays are created once per page, the first time any container enables
/// them, and never recreated.
pub fn activate(ctx: &EffectContext<'_>) -> anyhow::Result<()> {
    let (layer, fresh) = singleton(ctx, Singleton::LightRays, LIGHT_RAYS_CLASS)?;
    if !fresh {
        return Ok(());
    }
    let mut rng = StdRng::from_entropy();
    for spec in LightRaySpec::batch(&mut rng) {
        let ray = dom::create_div(ctx.document, LIGHT_RAY_CLASS)?;
        dom::set_style(&ray, RAY_DELAY_VAR, &format!("{}s", spec.delay_sec))?;
        dom::set_style(&ray, RAY_DURATION_VAR, &format!("{}s", spec.duration_sec))?;
        layer.append_child(&ray).map_err(dom::js_err)?;
    }
    log::debug!("[light-rays] layer created");
    Ok(())
}
