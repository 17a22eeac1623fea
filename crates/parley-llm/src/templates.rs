//! Canned reply bodies used by the stub responders.

pub const IMAGE_SAMPLE: &str = "# Here's an image example:
![Sample Image](https://via.placeholder.com/400x300?text=Generated+Image)
This demonstrates image embedding in chat.";

pub const VIDEO_SAMPLE: &str = "# Video Example:
<iframe width=\"400\" height=\"300\" src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\" frameborder=\"0\" allowfullscreen></iframe>";

pub const TABLE_SAMPLE: &str = "# Here's a table:
| Feature | Status | Progress |
|---------|--------|----------|
| Auth | ✅ Done | 100% |
| Chat | ✅ Done | 100% |
| Memory | ✅ Done | 100% |
| Media | 🔄 WIP | 75% |";

pub const FORMULA_SAMPLE: &str = r"# Mathematical Formula:
Here's the quadratic formula:

$$x = \frac{-b \pm \sqrt{b^2-4ac}}{2a}$$

And an inline formula: $E=mc^2$";

pub const CODE_SAMPLE: &str = "# Code Example:
Here's some Python code:

```python
def fibonacci(n):
    if n <= 1:
        return n
    return fibonacci(n-1) + fibonacci(n-2)

result = fibonacci(10)
print(f\"Result: {result}\")
```";

pub const WELCOME_SAMPLE: &str = "# Welcome to Rich Media Chat!

This chat supports:
- **Images** (markdown format)
- **Videos** (embedded iframes)
- **Tables** (markdown tables)
- **Formulas** (LaTeX with MathJax)
- **Code** (syntax highlighted)

Try asking about any of these features!";

/// Keyword groups checked in order; the first group with a hit picks the reply.
pub const RICH_MEDIA_RULES: &[(&[&str], &str)] = &[
    (&["image", "photo"], IMAGE_SAMPLE),
    (&["video", "youtube"], VIDEO_SAMPLE),
    (&["table", "data"], TABLE_SAMPLE),
    (&["formula", "equation", "math"], FORMULA_SAMPLE),
    (&["code", "python", "javascript"], CODE_SAMPLE),
];

/// Sample "generated" images, matched by keyword in order.
pub const SAMPLE_IMAGES: &[(&str, &str)] = &[
    ("sunset", "https://images.unsplash.com/photo-1495567720989-cebdbdd97913?w=400&h=300&fit=crop"),
    ("mountain", "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop"),
    ("ocean", "https://images.unsplash.com/photo-1505142468610-359e7d316be0?w=400&h=300&fit=crop"),
    ("forest", "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=400&h=300&fit=crop"),
    ("city", "https://images.unsplash.com/photo-1480714378408-67cf0d13bc1b?w=400&h=300&fit=crop"),
    ("space", "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?w=400&h=300&fit=crop"),
    ("abstract", "https://images.unsplash.com/photo-1557672172-298e090d0f80?w=400&h=300&fit=crop"),
    ("nature", "https://images.unsplash.com/photo-1502933691298-84fc14542831?w=400&h=300&fit=crop"),
];

pub const FALLBACK_IMAGE_KEYWORD: &str = "abstract";

pub const IMAGE_MODEL_NAME: &str = "Gemini 2.0 Image Generation";
