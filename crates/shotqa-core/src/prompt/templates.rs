//! Prompt texts sent alongside the screenshot.

/// Used when the caller asks for no particular focus.
pub const GENERAL_PROMPT: &str = "Analyze this fighting game image.";

/// Checklist for visual defects, graded by severity.
pub const BUG_DETECTION_PROMPT: &str = r#"Analyze this fighting game screenshot for visual bugs and issues:

1. ANIMATION ISSUES:
   - Character pose problems (T-pose, clipping, wrong orientation)
   - Animation stuttering or freezing indicators
   - Unnatural character positions

2. RENDERING PROBLEMS:
   - Z-fighting (flickering surfaces)
   - Missing or broken textures
   - Lighting/shadow artifacts
   - Transparency issues

3. UI/HUD BUGS:
   - Overlapping UI elements
   - Cut-off or clipped text
   - Misaligned health bars or meters
   - Missing UI components

4. VISUAL GLITCHES:
   - Screen tearing
   - Artifacts or corruption
   - Unexpected visual elements

List each issue found with a severity rating (Critical/Major/Minor).
If no issues found, say "No visual bugs detected.""#;

/// UX review scored per category on a 1-10 scale.
pub const UX_ANALYSIS_PROMPT: &str = r#"Evaluate this fighting game screenshot for UX quality:

1. HUD READABILITY (Score 1-10):
   - Are health bars clearly visible?
   - Is the super meter easy to read?
   - Are round indicators clear?
   - Can you tell which player is which?

2. VISUAL FEEDBACK (Score 1-10):
   - Are hit effects visible and impactful?
   - Are damage numbers readable?
   - Is there clear distinction between hit/block/whiff?

3. INFORMATION HIERARCHY (Score 1-10):
   - What draws your eye first? Is it the right thing?
   - Is critical info (health, meter) prominent?
   - Is there visual clutter?

4. AESTHETIC COHESION (Score 1-10):
   - Does the visual style feel unified?
   - Do UI elements match the game's theme?
   - Is there good color contrast?

Provide scores for each category and brief explanations.
End with an OVERALL UX SCORE (1-10)."#;
