/// Built-in essay loaded by `:sample`.
pub const SAMPLE_TEXT: &str = r#"The Importance of Natural Language Processing

Natural Language Processing (NLP) is a field of artificial intelligence that focuses on the interaction between computers and humans using natural language. The ultimate objective of NLP is to read, decipher, understand, and make sense of human languages in a valuable way.

Despite being a relatively new field, NLP has seen tremendous growth in recent years. From voice assistants like Siri and Alexa to grammar checking software like Grammarly, NLP applications have become an integral part of our daily lives.

One of the fundamental aspects of NLP is tokenization - the process of breaking down text into smaller units called tokens. These tokens can be words, characters, or subwords. This allows computers to understand the structure of sentences and the meaning behind them.

Part-of-speech tagging is another crucial task in NLP. It involves identifying whether a word is a noun, verb, adjective, or another part of speech. This helps in understanding the grammatical structure of sentences.

Consider the sentence: "The cat sat on the mat." Here, "The" and "the" are articles, "cat" and "mat" are nouns, "sat" is a verb, and "on" is a preposition. By analyzing these components, computers can begin to understand the meaning behind the sentence.

Pronouns like "he," "she," "it," "they," and "we" are particularly interesting in NLP because they often refer to entities mentioned earlier in the text. Resolving these references, a task known as anaphora resolution, is crucial for understanding the context of a conversation.

Prepositions such as "in," "on," "at," "by," and "with" indicate relationships between elements in a sentence. They provide spatial, temporal, or logical relationships, adding depth to the meaning of a text.

Articles like "a," "an," and "the" might seem insignificant, but they provide important contextual cues. "The" indicates a specific entity that the speaker assumes the listener is familiar with, while "a" and "an" introduce new entities.

As AI continues to evolve, the ability to process and understand natural language becomes increasingly important. Whether it's for translating languages, summarizing texts, or answering questions, NLP is at the forefront of making human-computer interaction more intuitive and efficient.

In conclusion, NLP is not just about understanding words in isolation, but about comprehending the intricate dance of language, with all its nuances, contexts, and implications. As we continue to refine our algorithms and approaches, the dream of having machines truly understand human language draws ever closer."#;
