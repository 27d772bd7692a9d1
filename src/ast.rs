use std::collections::HashMap;

/// Sentinel index meaning "no node".
///
/// Parent, child and sibling links use this value instead of an `Option` so a
/// [`Node`] stays a small, flat record. The root of a program always occupies
/// index `0`, so `0` is a valid index and cannot double as the sentinel.
pub const NIL: u32 = u32::MAX;

/// Upper bound on sibling-list traversal.
///
/// Sibling chains are acyclic by construction, but the arena is index-based
/// and a corrupted index could form a cycle. Traversal stops with an error
/// once this many links have been followed.
pub const MAX_SIBLINGS: usize = 10_000;

/// Represents a binary operator in the syntax tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOpKind {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
    /// Modulo (`%`)
    Mod,
    /// Matrix multiplication (`mult`)
    MatMul,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    Ne,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Le,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Ge,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl std::fmt::Display for BinaryOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
            Self::Mod => "%",
            Self::MatMul => "mult",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator in the syntax tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOpKind {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical negation (`not x`).
    Not,
}

/// The kind-specific payload of a [`Node`].
///
/// Multi-arity constructs (blocks, matrix elements, parameters, call
/// arguments) store the index of their first child; successors are threaded
/// through [`Node::next_sibling`]. The element count is stored alongside so
/// size queries do not require a traversal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NodeKind {
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// A 64-bit floating-point literal.
    FloatLiteral(f64),
    /// A string literal, interned in the string table.
    StringLiteral {
        /// Index of the decoded text in the string table.
        string: u32,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral(bool),
    /// Reference to a variable by name.
    Identifier {
        /// Index of the name in the string table.
        name: u32,
    },
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOpKind,
        /// Index of the left operand.
        left:  u32,
        /// Index of the right operand.
        right: u32,
    },
    /// A unary operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOpKind,
        /// Index of the operand.
        operand: u32,
    },
    /// An assignment `target = value`.
    Assignment {
        /// Index of the target identifier node.
        target: u32,
        /// Index of the assigned expression.
        value:  u32,
    },
    /// A matrix literal `[a, b; c, d]`.
    MatrixLiteral {
        /// Number of rows.
        rows:     u32,
        /// Number of columns.
        cols:     u32,
        /// Index of the first element node, row-major. [`NIL`] when empty.
        elements: u32,
        /// Whether the literal is `[]`.
        is_empty: bool,
    },
    /// Row access `object[index]`.
    ArrayAccess {
        /// Index of the expression being indexed.
        object: u32,
        /// Index of the index expression.
        index:  u32,
    },
    /// Member access `object.name`.
    MemberAccess {
        /// Index of the object expression.
        object: u32,
        /// Index of the member name in the string table.
        member: u32,
    },
    /// An `if`/`elif`/`else` statement.
    If {
        /// Index of the condition expression.
        condition:  u32,
        /// Index of the then-block.
        then_block: u32,
        /// Index of the else-block, or [`NIL`] when absent.
        else_block: u32,
    },
    /// A `while` statement.
    While {
        /// Index of the condition expression.
        condition: u32,
        /// Index of the body block.
        body:      u32,
    },
    /// A `for variable in iterable` statement.
    For {
        /// Index of the loop-variable identifier node.
        variable: u32,
        /// Index of the iterable expression.
        iterable: u32,
        /// Index of the body block.
        body:     u32,
    },
    /// A `function name(params):` definition.
    FunctionDef {
        /// Index of the function name in the string table.
        name:        u32,
        /// Index of the first parameter node, or [`NIL`].
        params:      u32,
        /// Number of parameters.
        param_count: u32,
        /// Index of the body block.
        body:        u32,
    },
    /// A call `name(args)`.
    FunctionCall {
        /// Index of the callee name in the string table.
        name:      u32,
        /// Index of the first argument node, or [`NIL`].
        args:      u32,
        /// Number of arguments.
        arg_count: u32,
    },
    /// A `return` statement, with or without a value.
    Return {
        /// Index of the returned expression, or [`NIL`] for a bare `return`.
        value: u32,
    },
    /// An indented block of statements.
    Block {
        /// Index of the first statement node, or [`NIL`].
        statements:      u32,
        /// Number of statements in the block.
        statement_count: u32,
    },
    /// An expression evaluated for its side effects.
    ExpressionStatement {
        /// Index of the expression.
        expression: u32,
    },
    /// The program root. Always occupies arena index `0`.
    Program,
}

/// A node in the flat syntax-tree arena.
///
/// Nodes are addressed by index and never move or change after parsing.
/// Child lists are singly linked: a parent stores only the head in its
/// payload (and in `first_child`), and each child points at the next via
/// `next_sibling`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node {
    /// The node kind and its payload.
    pub kind:         NodeKind,
    /// Index of the originating token, for diagnostics.
    pub token:        u32,
    /// Index of the parent node, or [`NIL`] for the root.
    pub parent:       u32,
    /// Index of the first child, or [`NIL`].
    pub first_child:  u32,
    /// Index of the next sibling, or [`NIL`].
    pub next_sibling: u32,
}

/// An append-only table of interned strings.
///
/// Identifier and string-literal text is stored once in a shared byte buffer
/// and referenced by index from the arena. Each entry is stored with a
/// terminating null byte so a bare pointer into the buffer is also a valid
/// C string. Index `0` is reserved for the empty string. Strings are never
/// freed or rewritten.
#[derive(Debug, Default)]
pub struct StringTable {
    data:    Vec<u8>,
    offsets: Vec<u32>,
    lookup:  HashMap<String, u32>,
}

impl StringTable {
    /// Creates a table containing only the reserved empty string.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self { data:    Vec::new(),
                               offsets: Vec::new(),
                               lookup:  HashMap::new(), };
        table.offsets.push(0);
        table.data.push(0);
        table.lookup.insert(String::new(), 0);
        table
    }

    /// Interns a string and returns its index.
    ///
    /// Interning the same text twice yields the same index.
    ///
    /// # Example
    /// ```
    /// use dakota::ast::StringTable;
    ///
    /// let mut table = StringTable::new();
    /// let a = table.intern("velocity");
    /// let b = table.intern("velocity");
    ///
    /// assert_eq!(a, b);
    /// assert_eq!(table.get(a), "velocity");
    /// ```
    pub fn intern(&mut self, text: &str) -> u32 {
        if let Some(&index) = self.lookup.get(text) {
            return index;
        }

        let index = u32::try_from(self.offsets.len()).unwrap_or(0);
        let offset = u32::try_from(self.data.len()).unwrap_or(0);
        self.offsets.push(offset);
        self.data.extend_from_slice(text.as_bytes());
        self.data.push(0);
        self.lookup.insert(text.to_string(), index);
        index
    }

    /// Returns the string stored at `index`, or `""` for an unknown index.
    #[must_use]
    pub fn get(&self, index: u32) -> &str {
        let Some(&start) = self.offsets.get(index as usize) else {
            return "";
        };
        let end = self.offsets
                      .get(index as usize + 1)
                      .copied()
                      .unwrap_or_else(|| u32::try_from(self.data.len()).unwrap_or(0));

        // The slice excludes the terminating null byte.
        std::str::from_utf8(&self.data[start as usize..end as usize - 1]).unwrap_or_default()
    }

    /// Number of interned strings, including the reserved empty string.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` when only the reserved empty string is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.len() <= 1
    }

    /// Bytes used by the string buffer and the offset vector.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.data.len() + self.offsets.len() * size_of::<u32>()
    }
}

/// The parsed program: a node arena plus its string table.
///
/// The arena is read-only after parsing; indices stay valid for its entire
/// lifetime.
#[derive(Debug)]
pub struct Ast {
    nodes:       Vec<Node>,
    /// Interned identifier and string-literal text.
    pub strings: StringTable,
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

impl Ast {
    /// Creates an arena holding only the program root at index `0`.
    #[must_use]
    pub fn new() -> Self {
        let root = Node { kind:         NodeKind::Program,
                          token:        0,
                          parent:       NIL,
                          first_child:  NIL,
                          next_sibling: NIL, };
        Self { nodes:   vec![root],
               strings: StringTable::new(), }
    }

    /// Appends a node and returns its index.
    pub fn push(&mut self, kind: NodeKind, token: u32) -> u32 {
        let index = u32::try_from(self.nodes.len()).unwrap_or(NIL);
        self.nodes.push(Node { kind,
                               token,
                               parent: NIL,
                               first_child: NIL,
                               next_sibling: NIL });
        index
    }

    /// Returns the node at `index`, or `None` when out of range.
    #[must_use]
    pub fn node(&self, index: u32) -> Option<&Node> {
        self.nodes.get(index as usize)
    }

    /// Appends `child` to the child list of `parent`.
    ///
    /// Sets the child's parent link and threads it onto the end of the
    /// sibling chain. Appending walks the existing chain and is bounded by
    /// [`MAX_SIBLINGS`].
    pub fn add_child(&mut self, parent: u32, child: u32) {
        if parent as usize >= self.nodes.len() || child as usize >= self.nodes.len() {
            return;
        }

        self.nodes[child as usize].parent = parent;

        let head = self.nodes[parent as usize].first_child;
        if head == NIL {
            self.nodes[parent as usize].first_child = child;
            return;
        }

        let mut current = head;
        let mut steps = 0;
        while self.nodes[current as usize].next_sibling != NIL && steps < MAX_SIBLINGS {
            current = self.nodes[current as usize].next_sibling;
            steps += 1;
        }
        self.nodes[current as usize].next_sibling = child;
    }

    /// Collects the sibling chain starting at `first` into a vector.
    ///
    /// Returns `None` when the chain exceeds [`MAX_SIBLINGS`] links or points
    /// outside the arena, which indicates a corrupted tree.
    ///
    /// # Example
    /// ```
    /// use dakota::ast::{Ast, NIL, NodeKind};
    ///
    /// let mut ast = Ast::new();
    /// let a = ast.push(NodeKind::IntegerLiteral(1), 0);
    /// let b = ast.push(NodeKind::IntegerLiteral(2), 0);
    /// ast.add_child(0, a);
    /// ast.add_child(0, b);
    ///
    /// assert_eq!(ast.children(a), Some(vec![a, b]));
    /// assert_eq!(ast.children(NIL), Some(vec![]));
    /// ```
    #[must_use]
    pub fn children(&self, first: u32) -> Option<Vec<u32>> {
        let mut indices = Vec::new();
        let mut current = first;

        while current != NIL {
            if current as usize >= self.nodes.len() || indices.len() >= MAX_SIBLINGS {
                return None;
            }
            indices.push(current);
            current = self.nodes[current as usize].next_sibling;
        }

        Some(indices)
    }

    /// Number of nodes in the arena, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Bytes used by the node arena and the string table.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.nodes.len() * size_of::<Node>() + self.strings.memory_usage()
    }
}
