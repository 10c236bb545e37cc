use super::types::GenerationResult;

pub(crate) const FALLBACK_TITLE: &str = "Chromatic Echo";
pub(crate) const FALLBACK_DESCRIPTION: &str =
    "Fallback demo: colorful orbits with gentle motion (Canvas, no deps).";
pub(crate) const FALLBACK_TO_NEXT: &str = "Add subtle interactivity without breaking CSP.";
pub(crate) const FALLBACK_COVER_PROMPT: &str =
    "Abstract neon orbits on black, soft glow, minimal poster";

/// Self-contained canvas scene. Inline style and script only.
pub(crate) const FALLBACK_HTML: &str = r#"<!doctype html>
<html lang="en">
<meta charset="utf-8"/>
<meta http-equiv="Content-Security-Policy" content="default-src 'none'; img-src data:; style-src 'unsafe-inline'; script-src 'unsafe-inline'; font-src data:;">
<meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>Chromatic Echo</title>
<style>html,body,#c{margin:0;padding:0;width:100%;height:100%}body{background:#000;color:#fff;font:16px/1.5 system-ui}</style>
<canvas id="c"></canvas>
<script>
const c=document.getElementById('c'),x=c.getContext('2d');function R(){c.width=innerWidth;c.height=innerHeight;}addEventListener('resize',R);R();
let t=0;function L(){t+=0.013;x.clearRect(0,0,c.width,c.height);const r=70+50*Math.sin(t*1.7);const cx=c.width/2+Math.cos(t*0.9)*160;const cy=c.height/2+Math.sin(t*1.1)*110;x.save();x.shadowBlur=30;x.shadowColor='hsl('+((t*60)%360)+' 100% 60%)';x.beginPath();x.arc(cx,cy,r,0,Math.PI*2);x.fillStyle='hsl('+((t*60)%360)+' 80% 55%)';x.fill();x.restore();requestAnimationFrame(L);}L();
</script>
</html>"#;

pub(crate) fn fallback_result() -> GenerationResult {
    GenerationResult {
        title: FALLBACK_TITLE.to_string(),
        description: FALLBACK_DESCRIPTION.to_string(),
        to_next: FALLBACK_TO_NEXT.to_string(),
        cover_prompt: FALLBACK_COVER_PROMPT.to_string(),
        html: FALLBACK_HTML.to_string(),
    }
}
