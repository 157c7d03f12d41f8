//! Reusable store fixtures

/// Two menus; `main` nests Shop → Clothes → Shoes, `footer` is flat.
pub const SHOP_STORE: &str = r#"
[[menus]]
id = 1
title = "main"
slug = "main"

[[menus]]
id = 2
title = "footer"
slug = "footer"

[[items]]
id = 1
title = "Home"
slug = "home"
menu = "main"

[[items]]
id = 2
title = "Shop"
slug = "shop"
menu = "main"

[[items]]
id = 3
title = "Clothes"
slug = "clothes"
menu = "main"
parent = 2

[[items]]
id = 4
title = "Shoes"
slug = "shoes"
menu = "main"
parent = 3

[[items]]
id = 5
title = "Contacts"
slug = "contacts"
menu = "footer"
"#;

/// A store whose `main` menu has a parent loop between items 2 and 3
pub const LOOP_STORE: &str = r#"
[[menus]]
id = 1
title = "main"
slug = "main"

[[items]]
id = 1
title = "Home"
slug = "home"
menu = "main"

[[items]]
id = 2
title = "A"
slug = "a"
menu = "main"
parent = 3

[[items]]
id = 3
title = "B"
slug = "b"
menu = "main"
parent = 2
"#;
