use std::fmt::Write;

pub const STARWARS_SCHEMA: &str = r#"
"""
The root query type.
"""
schema {
  query: Query
  mutation: Mutation
}

# Characters
interface Character {
  id: ID!
  name: String!
  friends: [Character]
  appearsIn: [Episode]!
}

enum Episode {
  "Released in 1977."
  NEWHOPE
  EMPIRE
  JEDI
}

type Human implements Character {
  id: ID!
  name: String!
  friends: [Character]
  appearsIn: [Episode]!
  homePlanet: String
  height(unit: LengthUnit = METER): Float
}

type Droid implements Character {
  id: ID!
  name: String!
  friends: [Character]
  appearsIn: [Episode]!
  primaryFunction: String
}

enum LengthUnit {
  METER
  FOOT
}

input ReviewInput {
  stars: Int!
  commentary: String
  favoriteColor: ColorInput
}

input ColorInput {
  red: Int!
  green: Int!
  blue: Int!
}

union SearchResult = Human | Droid

type Query {
  hero(episode: Episode): Character
  character(id: ID!): Character
  search(text: String): [SearchResult]
}

type Mutation {
  createReview(episode: Episode, review: ReviewInput!): Review
}

type Review {
  stars: Int!
  commentary: String
}

directive @deprecated(reason: String = "No longer supported") on FIELD_DEFINITION | ENUM_VALUE
"#;

pub const COMPLEX_QUERY: &str = r#"
query HeroComparison($first: Int = 3, $episode: Episode = JEDI) @cached(ttl: 60) {
  # Two heroes side by side
  leftComparison: hero(episode: $episode) {
    ...comparisonFields
  }
  rightComparison: hero(episode: EMPIRE) {
    ...comparisonFields
  }
  search(text: "an \"escaped\" é string") {
    __typename
    ... on Human {
      height(unit: FOOT)
    }
    ... on Droid @include(if: true) {
      primaryFunction
    }
  }
}

fragment comparisonFields on Character {
  name
  friendsConnection(first: $first, filter: {kinds: [HUMAN, DROID], minScore: 1.5e3}) {
    totalCount
    edges {
      node {
        name
      }
    }
  }
}
"#;

/// Generates a schema with `count` object types, each with a handful of
/// fields, arguments and descriptions.
pub fn synthetic_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 300);
    for i in 0..count {
        writeln!(out, "\"\"\"\nObject number {i}.\n\"\"\"").unwrap();
        writeln!(out, "type Object{i} implements Node & Entity @key(fields: \"id\") {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        writeln!(out, "  # The display name").unwrap();
        writeln!(out, "  name(locale: String = \"en\"): String").unwrap();
        writeln!(out, "  tags(first: Int = 10, after: String): [String!]!").unwrap();
        writeln!(out, "  score: Float @deprecated(reason: \"use rank\")").unwrap();
        writeln!(out, "  next: Object{}", (i + 1) % count).unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out
}

/// Generates a query with `depth` nested selection sets.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}child {{").unwrap();
        writeln!(out, "{indent}  id").unwrap();
    }
    writeln!(out, "{}name", "  ".repeat(depth + 1)).unwrap();
    for level in (0..depth).rev() {
        writeln!(out, "{}}}", "  ".repeat(level + 1)).unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a document containing `count` named operations.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        writeln!(out, "query Operation{i}($id: ID!) {{").unwrap();
        writeln!(out, "  node(id: $id) {{").unwrap();
        writeln!(out, "    id").unwrap();
        writeln!(out, "    field{i}: description").unwrap();
        writeln!(out, "  }}").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out
}
